//! HTTP adapter for the VIP gate.
//!
//! - `POST /api/auth/register`, `POST /api/auth/login`, `POST /api/auth/logout`
//! - `GET /api/vip`
//! - `GET|POST /api/admin/subscriptions`, `PUT /api/admin/predictions`
//! - `GET /health`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::{api_routes, app_router};
