//! Credential repository.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use super::RepositoryError;
use crate::domain::credential::{CredentialRow, UserCredential};
use crate::domain::foundation::Email;
use crate::ports::{read_rows, write_typed, RecordStore, RecordStoreError};

/// Registered users, keyed by normalized email.
pub type CredentialMap = BTreeMap<Email, UserCredential>;

/// Owns the credential cache. Credentials are append-only.
pub struct CredentialRepository {
    store: Arc<dyn RecordStore>,
    path: PathBuf,
    cache: RwLock<Arc<CredentialMap>>,
    write_lock: Mutex<()>,
}

impl CredentialRepository {
    pub fn new(store: Arc<dyn RecordStore>, path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            path: path.into(),
            cache: RwLock::new(Arc::new(CredentialMap::new())),
            write_lock: Mutex::new(()),
        }
    }

    /// Reads the users file into the cache. Missing or malformed files load as
    /// empty.
    pub async fn load(&self) -> Arc<CredentialMap> {
        let _guard = self.write_lock.lock().await;

        let credentials: CredentialMap =
            match read_rows::<CredentialRow>(self.store.as_ref(), &self.path).await {
                Ok((rows, skipped)) => {
                    if skipped > 0 {
                        tracing::warn!(skipped, "Skipped user entries that are not objects");
                    }
                    rows.into_iter()
                        .filter_map(CredentialRow::into_credential)
                        .map(|credential| (credential.email.clone(), credential))
                        .collect()
                }
                Err(RecordStoreError::NotFound(_)) => CredentialMap::new(),
                Err(e) => {
                    tracing::warn!(error = %e, "Users file unreadable, starting empty");
                    CredentialMap::new()
                }
            };

        tracing::info!(count = credentials.len(), "Loaded credentials");
        let credentials = Arc::new(credentials);
        *self.cache.write().await = credentials.clone();
        credentials
    }

    /// Adds a new credential and writes the full list through.
    ///
    /// # Errors
    /// - `AlreadyRegistered` if the email already has a credential
    /// - `Storage` if the write fails; the cache is unchanged
    pub async fn save_credential(&self, credential: UserCredential) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;

        let current = self.snapshot().await;
        if current.contains_key(&credential.email) {
            return Err(RepositoryError::AlreadyRegistered(credential.email));
        }

        let mut next = (*current).clone();
        next.insert(credential.email.clone(), credential);

        let rows: Vec<CredentialRow> = next.values().map(CredentialRow::from).collect();
        write_typed(self.store.as_ref(), &self.path, &rows).await?;

        *self.cache.write().await = Arc::new(next);
        Ok(())
    }

    pub async fn snapshot(&self) -> Arc<CredentialMap> {
        self.cache.read().await.clone()
    }

    pub async fn find(&self, email: &Email) -> Option<UserCredential> {
        self.snapshot().await.get(email).cloned()
    }
}
