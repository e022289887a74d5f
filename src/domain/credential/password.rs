//! Argon2id password hashing.
//!
//! Stored form is a PHC string (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`).
//! The server-wide pepper is passed to Argon2 as its secret input, so a leaked
//! users file cannot be checked offline without it.

use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use thiserror::Error;
use uuid::Uuid;

const ARGON2_M_COST: u32 = 19_456; // 19 MiB
const ARGON2_T_COST: u32 = 2;
const ARGON2_P_COST: u32 = 1;

/// Hashing failed inside Argon2 (bad parameters or an oversized pepper).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Password hashing failed: {0}")]
pub struct PasswordHashError(String);

/// Hashes and verifies passwords with a server-side pepper.
#[derive(Clone)]
pub struct PasswordHasher {
    pepper: Vec<u8>,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

impl PasswordHasher {
    pub fn new(pepper: impl AsRef<[u8]>) -> Self {
        Self {
            pepper: pepper.as_ref().to_vec(),
        }
    }

    /// Hashes `password` under a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let salt = SaltString::encode_b64(Uuid::new_v4().as_bytes())
            .map_err(|e| PasswordHashError(e.to_string()))?;
        let hash = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordHashError(e.to_string()))?;
        Ok(hash.to_string())
    }

    /// Returns true if `stored` is an Argon2 PHC string for `password` under
    /// this pepper. Anything else never verifies.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored) else {
            return false;
        };
        let Ok(argon2) = self.argon2() else {
            return false;
        };
        argon2.verify_password(password.as_bytes(), &parsed).is_ok()
    }

    fn argon2(&self) -> Result<Argon2<'_>, PasswordHashError> {
        let params = Params::new(ARGON2_M_COST, ARGON2_T_COST, ARGON2_P_COST, None)
            .map_err(|e| PasswordHashError(format!("invalid Argon2 parameters: {e}")))?;
        Argon2::new_with_secret(&self.pepper, Algorithm::Argon2id, Version::V0x13, params)
            .map_err(|e| PasswordHashError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new("test-pepper")
    }

    #[test]
    fn hash_then_verify_succeeds() {
        let stored = hasher().hash("s3cret!").unwrap();
        assert!(stored.starts_with("$argon2id$v=19$"));
        assert!(hasher().verify("s3cret!", &stored));
    }

    #[test]
    fn stored_hash_records_cost_parameters() {
        let stored = hasher().hash("s3cret!").unwrap();
        assert!(stored.contains("m=19456,t=2,p=1"));
    }

    #[test]
    fn wrong_password_fails() {
        let stored = hasher().hash("s3cret!").unwrap();
        assert!(!hasher().verify("S3cret!", &stored));
    }

    #[test]
    fn different_pepper_fails() {
        let stored = hasher().hash("s3cret!").unwrap();
        assert!(!PasswordHasher::new("other-pepper").verify("s3cret!", &stored));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        assert_ne!(
            hasher().hash("repeat").unwrap(),
            hasher().hash("repeat").unwrap()
        );
    }

    #[test]
    fn foreign_hash_formats_never_verify() {
        assert!(!hasher().verify("pw", "pbkdf2:sha256:260000$abc$def"));
        assert!(!hasher().verify("pw", "plaintext"));
        assert!(!hasher().verify("pw", "hmac-sha256$salt$digest"));
        assert!(!hasher().verify("pw", ""));
    }
}
