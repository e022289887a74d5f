//! Subscription source adapters - implementations of the SubscriptionSource port.
//!
//! - `JsonSubscriptionSource` - Durable or legacy JSON list
//! - `CsvSubscriptionSource` - Legacy `email,date_debut,date_fin` CSV

mod csv_source;
mod json_source;

pub use csv_source::{parse_subscriptions_csv, CsvError, CsvSubscriptionSource};
pub use json_source::JsonSubscriptionSource;
