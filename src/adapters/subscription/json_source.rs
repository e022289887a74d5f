//! JSON subscription source: a list of `{"email", "date_debut", "date_fin"}`.
//!
//! Serves both the durable file and the legacy local file; only the path and
//! the label differ.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::subscription::SubscriptionRow;
use crate::ports::{read_rows, RecordStore, RecordStoreError, SourceOutcome, SubscriptionSource};

/// Subscription source backed by a JSON dataset in a [`RecordStore`].
pub struct JsonSubscriptionSource {
    name: String,
    store: Arc<dyn RecordStore>,
    path: PathBuf,
}

impl JsonSubscriptionSource {
    pub fn new(name: impl Into<String>, store: Arc<dyn RecordStore>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            store,
            path: path.into(),
        }
    }
}

#[async_trait]
impl SubscriptionSource for JsonSubscriptionSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> SourceOutcome {
        match read_rows::<SubscriptionRow>(self.store.as_ref(), &self.path).await {
            Ok((rows, skipped)) => {
                if skipped > 0 {
                    tracing::warn!(source = %self.name, skipped, "Skipped subscription entries that are not objects");
                }
                SourceOutcome::from_records(
                    rows.into_iter().filter_map(SubscriptionRow::into_record).collect(),
                )
            }
            Err(RecordStoreError::NotFound(_)) => SourceOutcome::Empty,
            Err(e) => SourceOutcome::Failed(e.to_string()),
        }
    }
}
