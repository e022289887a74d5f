//! Record Store Port - Interface for persisting structured datasets.
//!
//! One dataset lives in one file. Implementations must make `write`
//! all-or-nothing: a failed write never leaves a previously valid file
//! truncated.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Errors that can occur during record store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordStoreError {
    #[error("No dataset at {0}")]
    NotFound(PathBuf),

    #[error("Malformed dataset at {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Failed to serialize dataset: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl RecordStoreError {
    pub fn parse(path: &Path, reason: impl Into<String>) -> Self {
        RecordStoreError::Parse {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        RecordStoreError::Io(message.into())
    }

    /// Returns true if the dataset simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RecordStoreError::NotFound(_))
    }
}

/// Port for reading and writing whole datasets as structured data
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the dataset at `path`
    ///
    /// # Errors
    /// - `NotFound` if no dataset exists at `path`
    /// - `Parse` if the content is not well-formed
    /// - `Io` for any other read failure
    async fn read(&self, path: &Path) -> Result<Value, RecordStoreError>;

    /// Overwrite the dataset at `path`, creating parent directories
    ///
    /// # Errors
    /// Returns `RecordStoreError::Io` if the write fails. The previous content
    /// is left intact in that case.
    async fn write(&self, path: &Path, data: &Value) -> Result<(), RecordStoreError>;

    /// Check if a dataset exists at `path`
    async fn exists(&self, path: &Path) -> Result<bool, RecordStoreError>;
}

/// Reads the dataset at `path` and deserializes it as `T`.
///
/// A shape mismatch is reported as `Parse`, same as malformed JSON.
pub async fn read_typed<T: DeserializeOwned>(
    store: &dyn RecordStore,
    path: &Path,
) -> Result<T, RecordStoreError> {
    let value = store.read(path).await?;
    serde_json::from_value(value).map_err(|e| RecordStoreError::parse(path, e.to_string()))
}

/// Reads a list dataset at `path`, deserializing each element as `T`.
///
/// Elements that do not deserialize are skipped and counted in the second
/// return value; only a non-list top level is reported as `Parse`.
pub async fn read_rows<T: DeserializeOwned>(
    store: &dyn RecordStore,
    path: &Path,
) -> Result<(Vec<T>, usize), RecordStoreError> {
    let elements: Vec<Value> = read_typed(store, path).await?;
    let total = elements.len();
    let rows: Vec<T> = elements
        .into_iter()
        .filter_map(|element| serde_json::from_value(element).ok())
        .collect();
    let skipped = total - rows.len();
    Ok((rows, skipped))
}

/// Serializes `data` and writes it to `path`.
pub async fn write_typed<T: Serialize + ?Sized>(
    store: &dyn RecordStore,
    path: &Path,
    data: &T,
) -> Result<(), RecordStoreError> {
    let value =
        serde_json::to_value(data).map_err(|e| RecordStoreError::Serialization(e.to_string()))?;
    store.write(path, &value).await
}
