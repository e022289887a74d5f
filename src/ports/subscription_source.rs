//! Subscription Source Port - One storage generation of subscription data.
//!
//! The subscription repository holds an ordered list of sources and asks each
//! in turn until one yields records.

use async_trait::async_trait;

use crate::domain::subscription::SubscriptionRecord;

/// What a single source produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    /// At least one usable record.
    Loaded(Vec<SubscriptionRecord>),
    /// The source is absent or holds no usable record.
    Empty,
    /// The source exists but could not be read or parsed.
    Failed(String),
}

impl SourceOutcome {
    /// Wraps `records`, collapsing an empty list to `Empty`.
    pub fn from_records(records: Vec<SubscriptionRecord>) -> Self {
        if records.is_empty() {
            SourceOutcome::Empty
        } else {
            SourceOutcome::Loaded(records)
        }
    }
}

/// Port for one location/format that may hold subscriptions
#[async_trait]
pub trait SubscriptionSource: Send + Sync {
    /// Short label used in logs, e.g. `"durable-json"`.
    fn name(&self) -> &str;

    /// Load every record this source holds. Never errors: failures are
    /// reported as `SourceOutcome::Failed`.
    async fn load(&self) -> SourceOutcome;
}
