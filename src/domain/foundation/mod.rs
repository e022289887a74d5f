//! Foundation module - Shared value objects and error types.
//!
//! These types are used across all domain modules.

mod auth;
mod email;
mod errors;
mod lenient;

pub use auth::{AuthError, AuthenticatedUser};
pub use email::Email;
pub use errors::{ErrorCode, ValidationError};
pub use lenient::string_or_empty;
