//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - RecordStore implementations (JSON files, in-memory)
//! - `subscription` - Subscription sources for the fallback chain
//! - `auth` - Session token implementations
//! - `http` - axum REST API

pub mod auth;
pub mod http;
pub mod storage;
pub mod subscription;
