//! Errors returned by access-related use cases.

use thiserror::Error;

use super::DenialReason;
use crate::domain::credential::PasswordHashError;
use crate::domain::foundation::{ErrorCode, ValidationError};

/// Failures of registration, login and VIP/admin operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Unknown email or wrong password; the two are not distinguished.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Identity is known but holds no valid subscription.
    #[error("{}", .0.user_message())]
    AccessDenied(DenialReason),

    /// The operation requires an administrator.
    #[error("Administrator access required")]
    Forbidden,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0} is already registered")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccessError {
    pub fn conflict(email: impl Into<String>) -> Self {
        AccessError::Conflict(email.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        AccessError::Storage(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AccessError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AccessError::AccessDenied(_) => ErrorCode::AccessDenied,
            AccessError::Forbidden => ErrorCode::Forbidden,
            AccessError::Validation(_) => ErrorCode::ValidationFailed,
            AccessError::Conflict(_) => ErrorCode::AlreadyRegistered,
            AccessError::Storage(_) => ErrorCode::StorageError,
            AccessError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

impl From<PasswordHashError> for AccessError {
    fn from(err: PasswordHashError) -> Self {
        AccessError::Internal(err.to_string())
    }
}
