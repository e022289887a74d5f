//! Domain layer - Value objects and pure business rules.
//!
//! Nothing in here touches the filesystem or the clock.

pub mod access;
pub mod credential;
pub mod foundation;
pub mod prediction;
pub mod subscription;
