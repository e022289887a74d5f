//! Authentication types for the domain layer.
//!
//! An [`AuthenticatedUser`] is produced once a session token has been verified.
//! It carries identity only: whether that identity may still reach the VIP area
//! is decided separately, on every request, by the session gate.
//!
//! # Example
//!
//! ```ignore
//! // In HTTP middleware, after session token validation:
//! let user = AuthenticatedUser::new(Email::parse("user@example.com")?);
//!
//! // Inject into request extensions for handlers to use
//! request.extensions_mut().insert(user);
//! ```

use super::Email;
use thiserror::Error;

/// Identity extracted from a validated session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Normalized email the session was issued for.
    pub email: Email,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(email: Email) -> Self {
        Self { email }
    }
}

/// Authentication errors that can occur during token handling.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The token could not be signed.
    #[error("Token issuance failed: {0}")]
    IssuanceFailed(String),
}

impl AuthError {
    /// Creates an issuance error with a message.
    pub fn issuance_failed(message: impl Into<String>) -> Self {
        Self::IssuanceFailed(message.into())
    }

    /// Returns true if this error indicates the user should log in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_user_new_keeps_normalized_email() {
        let user = AuthenticatedUser::new(Email::parse("Test@Example.com").unwrap());
        assert_eq!(user.email.as_str(), "test@example.com");
    }

    #[test]
    fn auth_error_invalid_token_displays_correctly() {
        let err = AuthError::InvalidToken;
        assert_eq!(format!("{}", err), "Invalid or expired token");
    }

    #[test]
    fn auth_error_token_expired_displays_correctly() {
        let err = AuthError::TokenExpired;
        assert_eq!(format!("{}", err), "Token expired");
    }

    #[test]
    fn auth_error_issuance_failed_displays_message() {
        let err = AuthError::issuance_failed("bad key");
        assert_eq!(format!("{}", err), "Token issuance failed: bad key");
    }

    #[test]
    fn auth_error_requires_reauthentication_for_token_errors() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(!AuthError::issuance_failed("x").requires_reauthentication());
    }
}
