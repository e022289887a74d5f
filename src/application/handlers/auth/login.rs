//! LoginHandler - verifies credentials, then admits through the session gate.

use std::sync::Arc;

use crate::application::repositories::CredentialRepository;
use crate::application::session_gate::SessionGate;
use crate::domain::access::AccessError;
use crate::domain::credential::PasswordHasher;
use crate::domain::foundation::Email;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub email: Email,
}

pub struct LoginHandler {
    credentials: Arc<CredentialRepository>,
    hasher: Arc<PasswordHasher>,
    gate: Arc<SessionGate>,
}

impl LoginHandler {
    pub fn new(
        credentials: Arc<CredentialRepository>,
        hasher: Arc<PasswordHasher>,
        gate: Arc<SessionGate>,
    ) -> Self {
        Self {
            credentials,
            hasher,
            gate,
        }
    }

    /// Unknown email and wrong password both yield `InvalidCredentials`.
    /// Correct credentials without a valid subscription yield `AccessDenied`.
    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AccessError> {
        let email = Email::parse(&cmd.email).map_err(|_| AccessError::InvalidCredentials)?;

        let credential = self
            .credentials
            .find(&email)
            .await
            .ok_or(AccessError::InvalidCredentials)?;

        if !self.hasher.verify(&cmd.password, &credential.password_hash) {
            tracing::info!(email = %email, "Login rejected: wrong password");
            return Err(AccessError::InvalidCredentials);
        }

        self.gate.admit_login(email.as_str()).await?;

        tracing::info!(email = %email, "User logged in");
        Ok(LoginResult { email })
    }
}
