//! HTTP handlers for the VIP API.
//!
//! These handlers connect axum routes to application layer command/query
//! handlers. No access rule lives here.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    AddSubscriptionCommand, GetVipContentQuery, ListSubscriptionsQuery, LoginCommand,
    PublishPredictionsCommand, RegisterUserCommand,
};
use crate::application::AppContext;

use super::dto::{
    AddSubscriptionRequest, AddSubscriptionResponse, HealthResponse, LoginRequest, LoginResponse,
    PredictionListResponse, PublishPredictionsRequest, RegisterRequest, RegisterResponse,
    SubscriptionListResponse, SubscriptionResponse, VipContentResponse,
};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Auth
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/auth/register
pub async fn register(
    State(ctx): State<AppContext>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = ctx
        .register_user_handler()
        .handle(RegisterUserCommand {
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            email: result.email.to_string(),
        }),
    ))
}

/// POST /api/auth/login - verifies credentials and subscription, issues a token
pub async fn login(
    State(ctx): State<AppContext>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = ctx
        .login_handler()
        .handle(LoginCommand {
            email: request.email,
            password: request.password,
        })
        .await?;

    let issued = ctx.tokens.issue(&result.email).await?;

    Ok(Json(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        email: result.email.to_string(),
    }))
}

/// POST /api/auth/logout - tokens are stateless; the client discards its copy
pub async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}

// ════════════════════════════════════════════════════════════════════════════════
// VIP
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/vip
pub async fn get_vip_content(
    State(ctx): State<AppContext>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let content = ctx
        .get_vip_content_handler()
        .handle(GetVipContentQuery {
            email: user.email.clone(),
        })
        .await?;

    Ok(Json(VipContentResponse {
        email: user.email.to_string(),
        pronos: content.pronos.clone(),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Admin
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/admin/subscriptions
pub async fn list_subscriptions(
    State(ctx): State<AppContext>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let result = ctx
        .list_subscriptions_handler()
        .handle(ListSubscriptionsQuery { actor: user.email })
        .await?;

    Ok(Json(SubscriptionListResponse::from(result)))
}

/// POST /api/admin/subscriptions
pub async fn add_subscription(
    State(ctx): State<AppContext>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<AddSubscriptionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = ctx
        .add_subscription_handler()
        .handle(AddSubscriptionCommand {
            actor: user.email,
            email: request.email,
            date_debut: request.date_debut,
            date_fin: request.date_fin,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AddSubscriptionResponse {
            subscription: SubscriptionResponse::from(&result.record),
            replaced: result.replaced,
        }),
    ))
}

/// PUT /api/admin/predictions
pub async fn publish_predictions(
    State(ctx): State<AppContext>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<PublishPredictionsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let list = ctx
        .publish_predictions_handler()
        .handle(PublishPredictionsCommand {
            actor: user.email,
            pronos: request.pronos,
        })
        .await?;

    Ok(Json(PredictionListResponse::from(list)))
}
