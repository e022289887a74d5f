//! HS256 JWT session tokens.
//!
//! Claims: `sub` (normalized email), `iat`, `exp`. Expiry is checked with no
//! leeway.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, Email};
use crate::ports::{IssuedToken, SessionTokens};

/// Upper bound on token lifetime (one year).
const MAX_TTL_SECS: u64 = 365 * 24 * 3600;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Session tokens signed with a shared server secret.
pub struct JwtSessionTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtSessionTokens {
    pub fn new(secret: &[u8], ttl: std::time::Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl: Duration::seconds(ttl.as_secs().min(MAX_TTL_SECS) as i64),
        }
    }

    fn sign(&self, claims: &SessionClaims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign session token: {}", e);
            AuthError::issuance_failed(e.to_string())
        })
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation
    }
}

#[async_trait]
impl SessionTokens for JwtSessionTokens {
    async fn issue(&self, email: &Email) -> Result<IssuedToken, AuthError> {
        let now = Utc::now();
        let expires_at: DateTime<Utc> = now + self.ttl;
        let claims = SessionClaims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(IssuedToken {
            token: self.sign(&claims)?,
            expires_at,
        })
    }

    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &Self::validation())
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Session token expired");
                        AuthError::TokenExpired
                    }
                    _ => {
                        tracing::warn!("Session token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })?;

        let email = Email::parse(&data.claims.sub).map_err(|_| {
            tracing::warn!("Session token has blank subject");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(email))
    }
}
