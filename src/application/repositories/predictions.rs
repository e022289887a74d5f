//! Prediction repository: the VIP content list.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::prediction::PredictionList;
use crate::ports::{read_typed, write_typed, RecordStore, RecordStoreError};

pub struct PredictionRepository {
    store: Arc<dyn RecordStore>,
    path: PathBuf,
    cache: RwLock<Arc<PredictionList>>,
    write_lock: Mutex<()>,
}

impl PredictionRepository {
    pub fn new(store: Arc<dyn RecordStore>, path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            path: path.into(),
            cache: RwLock::new(Arc::new(PredictionList::default())),
            write_lock: Mutex::new(()),
        }
    }

    /// Reads the predictions file into the cache; missing or malformed → empty.
    pub async fn load(&self) -> Arc<PredictionList> {
        let _guard = self.write_lock.lock().await;

        let list = match read_typed::<PredictionList>(self.store.as_ref(), &self.path).await {
            Ok(list) => list,
            Err(RecordStoreError::NotFound(_)) => PredictionList::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Predictions file unreadable, starting empty");
                PredictionList::default()
            }
        };

        tracing::info!(count = list.len(), "Loaded predictions");
        let list = Arc::new(list);
        *self.cache.write().await = list.clone();
        list
    }

    /// Replaces the whole list. On failure the cache is unchanged.
    pub async fn replace(&self, list: PredictionList) -> Result<(), RecordStoreError> {
        let _guard = self.write_lock.lock().await;
        write_typed(self.store.as_ref(), &self.path, &list).await?;
        *self.cache.write().await = Arc::new(list);
        Ok(())
    }

    pub async fn current(&self) -> Arc<PredictionList> {
        self.cache.read().await.clone()
    }
}
