//! Session token port.
//!
//! Login issues a token for a verified email; every later request presents it
//! as `Authorization: Bearer <token>`. A valid token proves identity only, the
//! session gate still decides access on each request.
//!
//! # Contract
//!
//! Implementations must:
//! - Sign tokens so they cannot be forged without the server secret
//! - Return `AuthError::InvalidToken` for malformed/bad signature tokens
//! - Return `AuthError::TokenExpired` for expired tokens

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::foundation::{AuthError, AuthenticatedUser, Email};

/// A freshly issued session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues and validates session tokens.
#[async_trait]
pub trait SessionTokens: Send + Sync {
    /// Issue a token for an already verified email.
    async fn issue(&self, email: &Email) -> Result<IssuedToken, AuthError>;

    /// Validate a raw token (without "Bearer " prefix) and return its identity.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
