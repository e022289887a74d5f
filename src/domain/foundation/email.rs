//! Normalized email address value object.
//!
//! Every lookup key in the system (subscriptions, credentials, admin set) is an
//! [`Email`]. Construction trims surrounding whitespace and lower-cases the
//! address, so two spellings of the same address always compare equal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A trimmed, lower-cased, non-empty email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Normalizes and wraps a raw address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if nothing remains after trimming.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let normalized = Self::normalize(raw);
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized form of `raw` without validating it.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Returns true if the address has a local part and a domain.
    pub fn is_well_formed(&self) -> bool {
        match self.0.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
            None => false,
        }
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
