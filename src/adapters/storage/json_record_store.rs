//! JSON File Record Store Adapter
//!
//! Stores each dataset as one pretty-printed UTF-8 JSON file.
//!
//! # Atomic Writes
//!
//! Uses a write-to-temp-then-rename pattern:
//! 1. Write content to `.{name}.{uuid}.tmp` next to the target
//! 2. Sync to disk
//! 3. Rename over the target
//!
//! A crash or error mid-write leaves the previous file untouched. Writes to the
//! same path are serialized.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::ports::{RecordStore, RecordStoreError};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// File-based record store
#[derive(Debug, Default)]
pub struct JsonFileRecordStore {
    write_locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
    /// Fails the next commit after the temp file is staged.
    #[cfg(test)]
    fail_next_commit: std::sync::atomic::AtomicBool,
}

impl JsonFileRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock guarding writes to `path`
    async fn write_lock(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut locks = self.write_locks.lock().await;
        locks.entry(path.to_path_buf()).or_default().clone()
    }

    /// Returns a unique temporary path in the same directory as `path`
    fn temp_path(path: &Path) -> Result<PathBuf, RecordStoreError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| RecordStoreError::io(format!("Invalid dataset path {}", path.display())))?;
        let temp_name = format!(
            ".{}.{}.tmp",
            file_name.to_string_lossy(),
            Uuid::new_v4().simple()
        );
        Ok(path.with_file_name(temp_name))
    }

    /// Ensure the parent directory exists
    async fn ensure_parent(path: &Path) -> Result<(), RecordStoreError> {
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir).await.map_err(|e| {
                    RecordStoreError::io(format!(
                        "Failed to create directory {}: {}",
                        dir.display(),
                        e
                    ))
                })
            }
            _ => Ok(()),
        }
    }

    /// Pretty JSON with four-space indentation, non-ASCII left unescaped
    fn encode(data: &Value) -> Result<Vec<u8>, RecordStoreError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        data.serialize(&mut serializer)
            .map_err(|e| RecordStoreError::Serialization(e.to_string()))?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// Moves the staged temp file over the target.
    async fn commit(&self, temp_path: &Path, path: &Path) -> Result<(), RecordStoreError> {
        #[cfg(test)]
        if self
            .fail_next_commit
            .swap(false, std::sync::atomic::Ordering::SeqCst)
        {
            return Err(RecordStoreError::io("commit failed"));
        }

        fs::rename(temp_path, path).await.map_err(|e| {
            RecordStoreError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            ))
        })
    }

    async fn write_temp(temp_path: &Path, content: &[u8]) -> Result<(), RecordStoreError> {
        let mut file = fs::File::create(temp_path).await.map_err(|e| {
            RecordStoreError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(content).await.map_err(|e| {
            RecordStoreError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            RecordStoreError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl RecordStore for JsonFileRecordStore {
    async fn read(&self, path: &Path) -> Result<Value, RecordStoreError> {
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(RecordStoreError::NotFound(path.to_path_buf()))
            }
            Err(e) => {
                return Err(RecordStoreError::io(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
        serde_json::from_slice(content).map_err(|e| RecordStoreError::parse(path, e.to_string()))
    }

    async fn write(&self, path: &Path, data: &Value) -> Result<(), RecordStoreError> {
        let content = Self::encode(data)?;

        let lock = self.write_lock(path).await;
        let _guard = lock.lock().await;

        Self::ensure_parent(path).await?;
        let temp_path = Self::temp_path(path)?;

        if let Err(e) = Self::write_temp(&temp_path, &content).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        if let Err(e) = self.commit(&temp_path, path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        tracing::debug!(path = %path.display(), bytes = content.len(), "Dataset written");
        Ok(())
    }

    async fn exists(&self, path: &Path) -> Result<bool, RecordStoreError> {
        fs::try_exists(path)
            .await
            .map_err(|e| RecordStoreError::io(format!("Failed to stat {}: {}", path.display(), e)))
    }
}
