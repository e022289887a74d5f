//! Credential domain module.
//!
//! - `user_credential` - UserCredential and its persisted row form
//! - `password` - Peppered Argon2id password hashing

mod user_credential;
mod password;

pub use user_credential::{CredentialRow, UserCredential};
pub use password::{PasswordHashError, PasswordHasher};
