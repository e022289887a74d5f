//! Axum router configuration for the VIP API.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    add_subscription, get_vip_content, health, list_subscriptions, login, logout,
    publish_predictions, register,
};
use crate::adapters::http::middleware::auth_middleware;
use crate::application::AppContext;

/// Create the `/api` router.
///
/// # Routes
///
/// ## Public
/// - `POST /auth/register` - Create a credential
/// - `POST /auth/login` - Exchange credentials for a session token
/// - `POST /auth/logout` - Stateless; always 204
///
/// ## Session required
/// - `GET /vip` - Prediction list, re-checked against the subscription each call
///
/// ## Administrator only
/// - `GET /admin/subscriptions` - All subscriptions with status
/// - `POST /admin/subscriptions` - Add or replace a subscription
/// - `PUT /admin/predictions` - Replace the prediction list
pub fn api_routes() -> Router<AppContext> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/vip", get(get_vip_content))
        .route(
            "/admin/subscriptions",
            get(list_subscriptions).post(add_subscription),
        )
        .route("/admin/predictions", put(publish_predictions))
}

/// Create the complete application router with session middleware and
/// request tracing.
pub fn app_router(ctx: AppContext) -> Router {
    let tokens = ctx.tokens.clone();
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(tokens, auth_middleware)),
        )
        .with_state(ctx)
}
