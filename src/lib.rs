//! VIP Gate - subscription-gated access to VIP content.
//!
//! Subscriptions are keyed by email and persisted as JSON on a durable volume,
//! seeded once from legacy JSON or CSV files. Every protected request re-checks
//! the subscription's end date (or the bypass flag / administrator set) before
//! content is served.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
