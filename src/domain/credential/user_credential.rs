//! Registered user credential and its persisted row form.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{string_or_empty, Email};

/// A registered user. Created once by registration, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredential {
    pub email: Email,
    pub password_hash: String,
}

impl UserCredential {
    pub fn new(email: Email, password_hash: impl Into<String>) -> Self {
        Self {
            email,
            password_hash: password_hash.into(),
        }
    }
}

/// On-disk shape of a credential: `{"email", "password"}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CredentialRow {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub password: String,
}

impl CredentialRow {
    /// Converts the row into a credential, or `None` if the email is blank.
    pub fn into_credential(self) -> Option<UserCredential> {
        let email = Email::parse(&self.email).ok()?;
        Some(UserCredential::new(email, self.password))
    }
}

impl From<&UserCredential> for CredentialRow {
    fn from(credential: &UserCredential) -> Self {
        Self {
            email: credential.email.to_string(),
            password: credential.password_hash.clone(),
        }
    }
}
