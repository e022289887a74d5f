//! In-Memory Record Store Adapter
//!
//! Stores datasets in memory. Useful for testing: it can simulate corrupt
//! datasets and failing writes.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{RecordStore, RecordStoreError};

#[derive(Debug, Clone)]
enum Entry {
    Valid(Value),
    Corrupt,
}

/// In-memory record store
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    entries: Arc<RwLock<HashMap<PathBuf, Entry>>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a dataset that will fail to parse on read
    pub async fn insert_corrupt(&self, path: impl Into<PathBuf>) {
        self.entries.write().await.insert(path.into(), Entry::Corrupt);
    }

    /// Makes every subsequent write fail with an IO error
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Get the number of stored datasets
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn read(&self, path: &Path) -> Result<Value, RecordStoreError> {
        match self.entries.read().await.get(path) {
            Some(Entry::Valid(value)) => Ok(value.clone()),
            Some(Entry::Corrupt) => Err(RecordStoreError::parse(path, "corrupt dataset")),
            None => Err(RecordStoreError::NotFound(path.to_path_buf())),
        }
    }

    async fn write(&self, path: &Path, data: &Value) -> Result<(), RecordStoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RecordStoreError::io("simulated write failure"));
        }
        self.entries
            .write()
            .await
            .insert(path.to_path_buf(), Entry::Valid(data.clone()));
        Ok(())
    }

    async fn exists(&self, path: &Path) -> Result<bool, RecordStoreError> {
        Ok(self.entries.read().await.contains_key(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn write_then_read() {
        let store = InMemoryRecordStore::new();
        store.write(Path::new("a.json"), &json!([1])).await.unwrap();
        assert_eq!(store.read(Path::new("a.json")).await.unwrap(), json!([1]));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn corrupt_entry_reads_as_parse_failure() {
        let store = InMemoryRecordStore::new();
        store.insert_corrupt("bad.json").await;
        assert!(store.exists(Path::new("bad.json")).await.unwrap());
        assert!(matches!(
            store.read(Path::new("bad.json")).await,
            Err(RecordStoreError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn failing_writes_leave_store_unchanged() {
        let store = InMemoryRecordStore::new();
        store.set_fail_writes(true);
        assert!(store.write(Path::new("a.json"), &json!([])).await.is_err());
        assert!(store.is_empty().await);
    }
}
