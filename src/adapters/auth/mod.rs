//! Authentication adapters.
//!
//! Implementations of the `SessionTokens` port:
//!
//! - `jwt` - HS256 tokens signed with the configured session secret

mod jwt;

pub use jwt::JwtSessionTokens;
