//! Startup seeding of durable datasets.
//!
//! The durable directory starts empty on a fresh deployment. Each dataset is
//! seeded exactly once: from the legacy file shipped next to the binary when
//! it parses, otherwise from a default value. An existing durable file is never
//! touched, so later edits to the legacy file are not re-imported.

use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

use crate::ports::{RecordStore, RecordStoreError};

/// What [`BootstrapResolver::ensure`] did for one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    AlreadyPresent,
    MigratedFromLegacy,
    SeededDefault,
}

/// Ensures durable files exist before repositories load them.
pub struct BootstrapResolver {
    store: Arc<dyn RecordStore>,
}

impl BootstrapResolver {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Seeds `durable` from `legacy` or `default` unless it already exists.
    ///
    /// Legacy content is only migrated when it parses and has the same top-level
    /// shape (list or object) as `default`. Write failures are returned; the
    /// caller decides whether they are fatal.
    pub async fn ensure(
        &self,
        durable: &Path,
        legacy: Option<&Path>,
        default: &Value,
    ) -> Result<BootstrapOutcome, RecordStoreError> {
        if self.store.exists(durable).await? {
            tracing::debug!(path = %durable.display(), "Durable dataset already present");
            return Ok(BootstrapOutcome::AlreadyPresent);
        }

        if let Some(legacy) = legacy {
            if let Some(value) = self.read_legacy(legacy, default).await {
                self.store.write(durable, &value).await?;
                tracing::info!(
                    from = %legacy.display(),
                    to = %durable.display(),
                    "Migrated legacy dataset"
                );
                return Ok(BootstrapOutcome::MigratedFromLegacy);
            }
        }

        self.store.write(durable, default).await?;
        tracing::info!(path = %durable.display(), "Seeded dataset with default value");
        Ok(BootstrapOutcome::SeededDefault)
    }

    async fn read_legacy(&self, legacy: &Path, default: &Value) -> Option<Value> {
        match self.store.read(legacy).await {
            Ok(value) if same_shape(&value, default) => Some(value),
            Ok(_) => {
                tracing::warn!(
                    path = %legacy.display(),
                    "Legacy dataset has unexpected shape, using default"
                );
                None
            }
            Err(RecordStoreError::NotFound(_)) => None,
            Err(e) => {
                tracing::warn!(path = %legacy.display(), error = %e, "Legacy dataset unreadable, using default");
                None
            }
        }
    }
}

fn same_shape(value: &Value, default: &Value) -> bool {
    match default {
        Value::Array(_) => value.is_array(),
        Value::Object(_) => value.is_object(),
        _ => true,
    }
}
