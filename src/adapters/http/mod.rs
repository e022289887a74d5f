//! HTTP adapters - REST API implementations.

pub mod error;
pub mod middleware;
pub mod vip;

pub use error::{ApiError, ErrorResponse};
pub use vip::app_router;
