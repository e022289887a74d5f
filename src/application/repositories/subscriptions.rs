//! Subscription repository: fallback chain on load, write-through on save.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::adapters::subscription::{CsvSubscriptionSource, JsonSubscriptionSource};
use crate::domain::foundation::Email;
use crate::domain::subscription::{SubscriptionRecord, SubscriptionStore};
use crate::ports::{write_typed, RecordStore, RecordStoreError, SourceOutcome, SubscriptionSource};

/// Owns the email → subscription cache.
///
/// `load` walks the sources in order and keeps the first one that yields at
/// least one record. Writes always go to the durable path and swap the cache in
/// the same call, so readers see their own writes without a reload.
pub struct SubscriptionRepository {
    store: Arc<dyn RecordStore>,
    durable_path: PathBuf,
    sources: Vec<Arc<dyn SubscriptionSource>>,
    cache: RwLock<Arc<SubscriptionStore>>,
    write_lock: Mutex<()>,
}

impl SubscriptionRepository {
    /// Creates a repository with an explicit source chain. The cache starts
    /// empty until [`load`](Self::load) runs.
    pub fn new(
        store: Arc<dyn RecordStore>,
        durable_path: impl Into<PathBuf>,
        sources: Vec<Arc<dyn SubscriptionSource>>,
    ) -> Self {
        Self {
            store,
            durable_path: durable_path.into(),
            sources,
            cache: RwLock::new(Arc::new(SubscriptionStore::new())),
            write_lock: Mutex::new(()),
        }
    }

    /// Creates a repository reading durable JSON, then legacy JSON, then
    /// legacy CSV.
    pub fn with_legacy_fallbacks(
        store: Arc<dyn RecordStore>,
        durable_path: impl Into<PathBuf>,
        legacy_json: Option<PathBuf>,
        legacy_csv: Option<PathBuf>,
    ) -> Self {
        let durable_path = durable_path.into();
        let mut sources: Vec<Arc<dyn SubscriptionSource>> = vec![Arc::new(
            JsonSubscriptionSource::new("durable-json", store.clone(), durable_path.clone()),
        )];
        if let Some(path) = legacy_json {
            sources.push(Arc::new(JsonSubscriptionSource::new(
                "legacy-json",
                store.clone(),
                path,
            )));
        }
        if let Some(path) = legacy_csv {
            sources.push(Arc::new(CsvSubscriptionSource::new(path)));
        }
        Self::new(store, durable_path, sources)
    }

    /// Resolves the source chain and replaces the cache with the result.
    ///
    /// Never fails: unreadable sources are logged and skipped, and an empty
    /// mapping is a valid result.
    pub async fn load(&self) -> Arc<SubscriptionStore> {
        let _guard = self.write_lock.lock().await;
        let resolved = Arc::new(self.resolve().await);
        *self.cache.write().await = resolved.clone();
        resolved
    }

    async fn resolve(&self) -> SubscriptionStore {
        for source in &self.sources {
            match source.load().await {
                SourceOutcome::Loaded(records) => {
                    tracing::info!(
                        source = source.name(),
                        count = records.len(),
                        "Loaded subscriptions"
                    );
                    return SubscriptionStore::from_records(records);
                }
                SourceOutcome::Empty => {
                    tracing::debug!(source = source.name(), "Subscription source empty");
                }
                SourceOutcome::Failed(reason) => {
                    tracing::warn!(
                        source = source.name(),
                        reason = %reason,
                        "Subscription source failed, trying next"
                    );
                }
            }
        }

        tracing::info!("No subscriptions found in any source");
        SubscriptionStore::new()
    }

    /// Writes `store` to the durable path, then makes it the cache.
    ///
    /// On failure the cache keeps its previous value.
    pub async fn save(&self, store: SubscriptionStore) -> Result<(), RecordStoreError> {
        let _guard = self.write_lock.lock().await;
        self.write_through(store).await
    }

    /// Inserts or replaces the record for `record.email`.
    pub async fn save_subscription(
        &self,
        record: SubscriptionRecord,
    ) -> Result<Arc<SubscriptionStore>, RecordStoreError> {
        let _guard = self.write_lock.lock().await;
        let next = self.snapshot().await.with_record(record);
        self.write_through(next).await?;
        Ok(self.snapshot().await)
    }

    async fn write_through(&self, store: SubscriptionStore) -> Result<(), RecordStoreError> {
        write_typed(self.store.as_ref(), &self.durable_path, &store.to_rows()).await?;
        tracing::debug!(count = store.len(), "Saved subscriptions");
        *self.cache.write().await = Arc::new(store);
        Ok(())
    }

    /// Current cached mapping.
    pub async fn snapshot(&self) -> Arc<SubscriptionStore> {
        self.cache.read().await.clone()
    }

    pub async fn find(&self, email: &Email) -> Option<SubscriptionRecord> {
        self.snapshot().await.get(email).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryRecordStore, JsonFileRecordStore};
    use serde_json::json;
    use std::path::Path;
    use tempfile::TempDir;

    const DURABLE: &str = "/data/abonnements.json";
    const LEGACY_JSON: &str = "abonnements.json";

    fn email(raw: &str) -> Email {
        Email::parse(raw).unwrap()
    }

    fn record(raw: &str, end: &str) -> SubscriptionRecord {
        SubscriptionRecord::new(email(raw), "2024-01-01", end)
    }

    fn repository(store: &InMemoryRecordStore, csv: Option<PathBuf>) -> SubscriptionRepository {
        SubscriptionRepository::with_legacy_fallbacks(
            Arc::new(store.clone()),
            DURABLE,
            Some(PathBuf::from(LEGACY_JSON)),
            csv,
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Load
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn durable_source_wins() {
        let store = InMemoryRecordStore::new();
        store
            .write(Path::new(DURABLE), &json!([{"email": "durable@x.com", "date_fin": "2030-01-01"}]))
            .await
            .unwrap();
        store
            .write(Path::new(LEGACY_JSON), &json!([{"email": "legacy@x.com", "date_fin": "2030-01-01"}]))
            .await
            .unwrap();

        let loaded = repository(&store, None).load().await;

        assert!(loaded.contains(&email("durable@x.com")));
        assert!(!loaded.contains(&email("legacy@x.com")));
    }

    #[tokio::test]
    async fn damaged_durable_row_keeps_durable_source_and_survives_save() {
        let store = InMemoryRecordStore::new();
        store
            .write(
                Path::new(DURABLE),
                &json!([
                    {"email": "good@x.com", "date_debut": "2024-01-01", "date_fin": "2030-01-01"},
                    {"email": "bad@x.com", "date_debut": "2024-01-01", "date_fin": null}
                ]),
            )
            .await
            .unwrap();
        store
            .write(Path::new(LEGACY_JSON), &json!([{"email": "stale@x.com", "date_fin": "2030-01-01"}]))
            .await
            .unwrap();
        let repo = repository(&store, None);

        let loaded = repo.load().await;
        assert!(loaded.contains(&email("good@x.com")));
        assert!(loaded.contains(&email("bad@x.com")));
        assert!(!loaded.contains(&email("stale@x.com")));

        repo.save_subscription(record("new@x.com", "2031-01-01")).await.unwrap();

        let on_disk = store.read(Path::new(DURABLE)).await.unwrap();
        let emails: Vec<&str> = on_disk
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["email"].as_str().unwrap())
            .collect();
        assert_eq!(emails, vec!["bad@x.com", "good@x.com", "new@x.com"]);
    }

    #[tokio::test]
    async fn empty_durable_falls_through_to_legacy_json() {
        let store = InMemoryRecordStore::new();
        store.write(Path::new(DURABLE), &json!([])).await.unwrap();
        store
            .write(Path::new(LEGACY_JSON), &json!([{"email": "Legacy@X.com", "date_fin": "2030-01-01"}]))
            .await
            .unwrap();

        let loaded = repository(&store, None).load().await;

        assert!(loaded.contains(&email("legacy@x.com")));
    }

    #[tokio::test]
    async fn corrupt_durable_falls_through_to_legacy_json() {
        let store = InMemoryRecordStore::new();
        store.insert_corrupt(DURABLE).await;
        store
            .write(Path::new(LEGACY_JSON), &json!([{"email": "legacy@x.com", "date_fin": "2030-01-01"}]))
            .await
            .unwrap();

        let loaded = repository(&store, None).load().await;

        assert_eq!(loaded.len(), 1);
    }

    #[tokio::test]
    async fn falls_back_to_csv() {
        let temp_dir = TempDir::new().unwrap();
        let csv = temp_dir.path().join("abonnements.csv");
        std::fs::write(&csv, "email,date_debut,date_fin\nbob@x.com,2024-01-01,2030-01-01\n").unwrap();

        let repo = repository(&InMemoryRecordStore::new(), Some(csv));
        repo.load().await;

        let found = repo.find(&email("bob@x.com")).await.unwrap();
        assert_eq!(found.period_end, "2030-01-01");
    }

    #[tokio::test]
    async fn nothing_anywhere_is_empty() {
        let loaded = repository(&InMemoryRecordStore::new(), None).load().await;
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn later_duplicate_wins() {
        let store = InMemoryRecordStore::new();
        store
            .write(
                Path::new(DURABLE),
                &json!([
                    {"email": "a@x.com", "date_fin": "2020-01-01"},
                    {"email": "A@X.com", "date_fin": "2030-01-01"}
                ]),
            )
            .await
            .unwrap();

        let repo = repository(&store, None);
        repo.load().await;

        assert_eq!(repo.find(&email("a@x.com")).await.unwrap().period_end, "2030-01-01");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Save
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn save_subscription_is_visible_without_reload() {
        let store = InMemoryRecordStore::new();
        let repo = repository(&store, None);

        repo.save_subscription(record("new@x.com", "2030-01-01")).await.unwrap();

        assert!(repo.find(&email("new@x.com")).await.is_some());
        assert_eq!(
            store.read(Path::new(DURABLE)).await.unwrap(),
            json!([{"email": "new@x.com", "date_debut": "2024-01-01", "date_fin": "2030-01-01"}])
        );
    }

    #[tokio::test]
    async fn save_subscription_replaces_existing_record() {
        let repo = repository(&InMemoryRecordStore::new(), None);
        repo.save_subscription(record("a@x.com", "2024-06-01")).await.unwrap();

        let snapshot = repo.save_subscription(record("a@x.com", "2031-01-01")).await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(repo.find(&email("a@x.com")).await.unwrap().period_end, "2031-01-01");
    }

    #[tokio::test]
    async fn failed_write_keeps_cache() {
        let store = InMemoryRecordStore::new();
        let repo = repository(&store, None);
        repo.save_subscription(record("kept@x.com", "2030-01-01")).await.unwrap();

        store.set_fail_writes(true);
        let result = repo.save_subscription(record("lost@x.com", "2030-01-01")).await;

        assert!(result.is_err());
        assert!(repo.find(&email("kept@x.com")).await.is_some());
        assert!(repo.find(&email("lost@x.com")).await.is_none());
    }

    #[tokio::test]
    async fn save_writes_rows_ordered_by_email() {
        let store = InMemoryRecordStore::new();
        let repo = repository(&store, None);

        repo.save(SubscriptionStore::from_records(vec![
            record("zed@x.com", "2030-01-01"),
            record("amy@x.com", "2030-01-01"),
        ]))
        .await
        .unwrap();

        let rows = store.read(Path::new(DURABLE)).await.unwrap();
        assert_eq!(rows[0]["email"], "amy@x.com");
        assert_eq!(rows[1]["email"], "zed@x.com");
    }

    #[tokio::test]
    async fn save_then_load_in_fresh_instance_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let durable = temp_dir.path().join("data").join("abonnements.json");
        let store: Arc<dyn RecordStore> = Arc::new(JsonFileRecordStore::new());

        let first = SubscriptionRepository::with_legacy_fallbacks(store.clone(), &durable, None, None);
        first.save_subscription(record("Élodie@Example.com", "2030-12-31")).await.unwrap();

        let second = SubscriptionRepository::with_legacy_fallbacks(store, &durable, None, None);
        let loaded = second.load().await;

        assert_eq!(
            loaded.get(&email("élodie@example.com")),
            Some(&record("élodie@example.com", "2030-12-31"))
        );
    }

    #[tokio::test]
    async fn concurrent_saves_keep_every_record() {
        let repo = Arc::new(repository(&InMemoryRecordStore::new(), None));

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.save_subscription(record(&format!("user{}@x.com", i), "2030-01-01"))
                        .await
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.snapshot().await.len(), 16);
    }
}
