//! Session gate: re-checks validity on every protected request.

use std::sync::Arc;

use super::validity_oracle::ValidityOracle;
use crate::domain::access::AccessError;

/// Maps an authenticated identity to continued access.
///
/// Nothing is cached per session: a subscription that expires mid-session
/// denies the holder on their next request.
pub struct SessionGate {
    oracle: Arc<ValidityOracle>,
}

impl SessionGate {
    pub fn new(oracle: Arc<ValidityOracle>) -> Self {
        Self { oracle }
    }

    /// Checks a protected request made by `email`.
    pub async fn authorize(&self, email: &str) -> Result<(), AccessError> {
        self.check(email, "request").await
    }

    /// Checks a login attempt. Same rule as [`authorize`](Self::authorize).
    pub async fn admit_login(&self, email: &str) -> Result<(), AccessError> {
        self.check(email, "login").await
    }

    async fn check(&self, email: &str, stage: &'static str) -> Result<(), AccessError> {
        let decision = self.oracle.decide(email, ValidityOracle::today()).await;
        match decision.into_result() {
            Ok(reason) => {
                tracing::debug!(stage, ?reason, "Access granted");
                Ok(())
            }
            Err(reason) => {
                tracing::info!(stage, ?reason, "Access denied");
                Err(AccessError::AccessDenied(reason))
            }
        }
    }
}
