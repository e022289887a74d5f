//! RegisterUserHandler - Command handler for creating a credential.

use std::sync::Arc;

use crate::application::repositories::CredentialRepository;
use crate::domain::access::AccessError;
use crate::domain::credential::{PasswordHasher, UserCredential};
use crate::domain::foundation::{Email, ValidationError};

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Command to register a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub email: Email,
}

/// Handler for registering users.
pub struct RegisterUserHandler {
    credentials: Arc<CredentialRepository>,
    hasher: Arc<PasswordHasher>,
}

impl RegisterUserHandler {
    pub fn new(credentials: Arc<CredentialRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self {
            credentials,
            hasher,
        }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<RegisterUserResult, AccessError> {
        // 1. Validate input
        let email = Email::parse(&cmd.email)?;
        if !email.is_well_formed() {
            return Err(ValidationError::invalid_format("email", "must contain '@'").into());
        }
        if cmd.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::too_short("password", MIN_PASSWORD_LEN).into());
        }

        // 2. Hash and persist
        let password_hash = self.hasher.hash(&cmd.password)?;
        let credential = UserCredential::new(email.clone(), password_hash);
        self.credentials.save_credential(credential).await?;

        tracing::info!(email = %email, "User registered");
        Ok(RegisterUserResult { email })
    }
}
