//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum secret length enforced in production.
const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Session token and password hashing secrets
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing key for session tokens
    #[serde(default = "empty_secret")]
    pub session_secret: SecretString,

    /// Secret input mixed into every Argon2 password hash
    #[serde(default = "empty_secret")]
    pub password_pepper: SecretString,

    /// Session token lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,
}

impl AuthConfig {
    /// Get session TTL as Duration
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Validate authentication configuration
    ///
    /// Secrets must be present everywhere; in production they must also be at
    /// least 32 bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secrets = [
            ("SESSION_SECRET", &self.session_secret),
            ("PASSWORD_PEPPER", &self.password_pepper),
        ];
        for (name, secret) in secrets {
            let len = secret.expose_secret().len();
            if len == 0 {
                return Err(ValidationError::MissingRequired(name));
            }
            if *environment == Environment::Production && len < MIN_PRODUCTION_SECRET_LEN {
                return Err(ValidationError::SecretTooShort {
                    name,
                    min: MIN_PRODUCTION_SECRET_LEN,
                });
            }
        }

        if self.session_ttl_secs < 60 || self.session_ttl_secs > 365 * 24 * 3600 {
            return Err(ValidationError::InvalidSessionTtl);
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: empty_secret(),
            password_pepper: empty_secret(),
            session_ttl_secs: default_session_ttl(),
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

fn default_session_ttl() -> u64 {
    86_400
}
