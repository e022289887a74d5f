//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that validates Bearer tokens and injects user into extensions
//! - `RequireAuth` - Extractor that requires authentication
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! A valid token only proves identity. Subscription validity is checked by the
//! handler through the session gate on every request.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthError, AuthenticatedUser, ErrorCode};
use crate::ports::SessionTokens;

/// Auth middleware state - wraps the session token service.
pub type AuthState = Arc<dyn SessionTokens>;

/// Authentication middleware that validates Bearer tokens.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates the token using the `SessionTokens` port
/// 3. On success, injects `AuthenticatedUser` into request extensions
/// 4. On missing token, continues without injecting (public routes)
/// 5. On invalid or expired token, returns 401 Unauthorized
pub async fn auth_middleware(
    State(tokens): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim);

    let Some(token) = token else {
        return next.run(request).await;
    };

    match tokens.validate(token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => {
            let message = match &e {
                AuthError::TokenExpired => "Session expired",
                _ => "Invalid session token",
            };
            (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(ErrorCode::Unauthorized.to_string(), message)),
            )
                .into_response()
        }
    }
}

/// Extractor that requires authentication.
///
/// If no user is in the request extensions (the auth middleware saw no valid
/// token), returns 401 Unauthorized.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid session token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthRejection::Unauthenticated => (StatusCode::UNAUTHORIZED, "Authentication required"),
        };

        (
            status,
            Json(ErrorResponse::new(ErrorCode::Unauthorized.to_string(), message)),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Email;
    use crate::ports::IssuedToken;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::extract::FromRequestParts;
    use axum::http::Request as HttpRequest;
    use axum::routing::get;
    use axum::{middleware, Router};
    use tower::ServiceExt;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser::new(Email::parse("test@example.com").unwrap())
    }

    /// Accepts exactly one token; reports `expired` as expired.
    struct FixedTokens;

    #[async_trait]
    impl SessionTokens for FixedTokens {
        async fn issue(&self, _email: &Email) -> Result<IssuedToken, AuthError> {
            Err(AuthError::issuance_failed("not used"))
        }

        async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            match token {
                "valid-token" => Ok(test_user()),
                "expired" => Err(AuthError::TokenExpired),
                _ => Err(AuthError::InvalidToken),
            }
        }
    }

    fn app() -> Router {
        let tokens: AuthState = Arc::new(FixedTokens);
        Router::new()
            .route(
                "/protected",
                get(|RequireAuth(user): RequireAuth| async move { user.email.to_string() }),
            )
            .route("/public", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(tokens, auth_middleware))
    }

    async fn status_of(uri: &str, authorization: Option<&str>) -> StatusCode {
        let mut builder = HttpRequest::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Middleware Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn valid_token_reaches_protected_route() {
        assert_eq!(status_of("/protected", Some("Bearer valid-token")).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_token_is_rejected_by_extractor() {
        assert_eq!(status_of("/protected", None).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_token_passes_public_route() {
        assert_eq!(status_of("/public", None).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_or_expired_token_is_rejected_everywhere() {
        assert_eq!(status_of("/public", Some("Bearer junk")).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_of("/protected", Some("Bearer expired")).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_ignored() {
        assert_eq!(status_of("/protected", Some("Basic dXNlcjpwYXNz")).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_of("/public", Some("Basic dXNlcjpwYXNz")).await, StatusCode::OK);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // RequireAuth Extractor Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn require_auth_extracts_user_from_extensions() {
        let mut request: HttpRequest<()> = HttpRequest::builder().uri("/test").body(()).unwrap();
        request.extensions_mut().insert(test_user());
        let (mut parts, _body) = request.into_parts();

        let RequireAuth(user) = RequireAuth::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(user.email.as_str(), "test@example.com");
    }

    #[test]
    fn auth_rejection_returns_401() {
        let response = AuthRejection::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
