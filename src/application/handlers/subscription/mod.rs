//! Subscription handlers (administrator only).
//!
//! ## Commands
//! - Adding or replacing a subscription
//!
//! ## Queries
//! - Listing subscriptions with their current status

mod add_subscription;
mod list_subscriptions;

pub use add_subscription::{AddSubscriptionCommand, AddSubscriptionHandler, AddSubscriptionResult};
pub use list_subscriptions::{
    ListSubscriptionsHandler, ListSubscriptionsQuery, ListSubscriptionsResult, SubscriptionStatus,
};
