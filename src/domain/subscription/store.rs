//! In-memory subscription mapping.

use std::collections::BTreeMap;

use super::{SubscriptionRecord, SubscriptionRow};
use crate::domain::foundation::Email;

/// Mapping from normalized email to subscription, ordered by email.
///
/// Treated as an immutable snapshot: writers derive a new store with
/// [`SubscriptionStore::with_record`] and swap it in whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionStore {
    records: BTreeMap<Email, SubscriptionRecord>,
}

impl SubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from records. A later record for the same email replaces
    /// an earlier one.
    pub fn from_records(records: impl IntoIterator<Item = SubscriptionRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.email.clone(), record))
            .collect();
        Self { records }
    }

    /// Builds a store from persisted rows, dropping rows with a blank email.
    pub fn from_rows(rows: impl IntoIterator<Item = SubscriptionRow>) -> Self {
        Self::from_records(rows.into_iter().filter_map(SubscriptionRow::into_record))
    }

    pub fn get(&self, email: &Email) -> Option<&SubscriptionRecord> {
        self.records.get(email)
    }

    pub fn contains(&self, email: &Email) -> bool {
        self.records.contains_key(email)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in email order.
    pub fn iter(&self) -> impl Iterator<Item = &SubscriptionRecord> {
        self.records.values()
    }

    /// Returns a copy of this store with `record` inserted or replaced.
    pub fn with_record(&self, record: SubscriptionRecord) -> Self {
        let mut records = self.records.clone();
        records.insert(record.email.clone(), record);
        Self { records }
    }

    /// Rows in email order, ready to be written.
    pub fn to_rows(&self) -> Vec<SubscriptionRow> {
        self.records.values().map(SubscriptionRow::from).collect()
    }
}
