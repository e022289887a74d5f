//! Subscription domain module.
//!
//! # Module Structure
//!
//! - `record` - SubscriptionRecord and its persisted row form
//! - `store` - Ordered email → record snapshot

mod record;
mod store;

pub use record::{SubscriptionRecord, SubscriptionRow, DATE_FORMAT};
pub use store::SubscriptionStore;
