//! API error type and response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::access::AccessError;
use crate::domain::foundation::{AuthError, ErrorCode};

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// Error type for API handlers.
#[derive(Debug)]
pub enum ApiError {
    Access(AccessError),
    Auth(AuthError),
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        Self::Access(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::Auth(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Access(err) => {
                let status = match err {
                    AccessError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                    AccessError::AccessDenied(_) | AccessError::Forbidden => StatusCode::FORBIDDEN,
                    AccessError::Validation(_) => StatusCode::BAD_REQUEST,
                    AccessError::Conflict(_) => StatusCode::CONFLICT,
                    AccessError::Storage(_) | AccessError::Internal(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                let body = match err {
                    AccessError::Storage(detail) | AccessError::Internal(detail) => {
                        tracing::error!(detail = %detail, code = %err.code(), "Request failed");
                        ErrorResponse::new(err.code().to_string(), "An internal error occurred")
                    }
                    AccessError::Validation(validation) => ErrorResponse::with_details(
                        err.code().to_string(),
                        err.to_string(),
                        serde_json::json!({ "reason": validation.to_string() }),
                    ),
                    _ => ErrorResponse::new(err.code().to_string(), err.to_string()),
                };
                (status, body)
            }
            ApiError::Auth(err) if err.requires_reauthentication() => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(ErrorCode::Unauthorized.to_string(), err.to_string()),
            ),
            ApiError::Auth(err) => {
                tracing::error!(error = %err, "Session token failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        ErrorCode::InternalError.to_string(),
                        "An internal error occurred",
                    ),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
