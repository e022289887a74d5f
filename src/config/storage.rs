//! Storage configuration: durable dataset paths and legacy seed files.

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where datasets live.
///
/// Durable paths default to files under `data_dir` (a persistent volume).
/// Legacy paths point at files shipped alongside the application; they are
/// read once to seed the durable files.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    pub subscriptions_path: Option<PathBuf>,
    pub users_path: Option<PathBuf>,
    pub predictions_path: Option<PathBuf>,

    #[serde(default = "default_legacy_subscriptions_json")]
    pub legacy_subscriptions_json: PathBuf,

    #[serde(default = "default_legacy_subscriptions_csv")]
    pub legacy_subscriptions_csv: PathBuf,

    #[serde(default = "default_legacy_users_json")]
    pub legacy_users_json: PathBuf,

    #[serde(default = "default_legacy_predictions_json")]
    pub legacy_predictions_json: PathBuf,
}

impl StorageConfig {
    /// Config rooted at `data_dir`, with default file names everywhere.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    pub fn subscriptions_path(&self) -> PathBuf {
        self.durable(&self.subscriptions_path, "abonnements.json")
    }

    pub fn users_path(&self) -> PathBuf {
        self.durable(&self.users_path, "users.json")
    }

    pub fn predictions_path(&self) -> PathBuf {
        self.durable(&self.predictions_path, "pronos.json")
    }

    fn durable(&self, explicit: &Option<PathBuf>, file_name: &str) -> PathBuf {
        explicit
            .clone()
            .unwrap_or_else(|| self.data_dir.join(file_name))
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyPath("data_dir"));
        }
        let explicit = [
            ("subscriptions_path", &self.subscriptions_path),
            ("users_path", &self.users_path),
            ("predictions_path", &self.predictions_path),
        ];
        for (name, path) in explicit {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(ValidationError::EmptyPath(name));
            }
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            subscriptions_path: None,
            users_path: None,
            predictions_path: None,
            legacy_subscriptions_json: default_legacy_subscriptions_json(),
            legacy_subscriptions_csv: default_legacy_subscriptions_csv(),
            legacy_users_json: default_legacy_users_json(),
            legacy_predictions_json: default_legacy_predictions_json(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("/var/data")
}

fn default_legacy_subscriptions_json() -> PathBuf {
    PathBuf::from("abonnements.json")
}

fn default_legacy_subscriptions_csv() -> PathBuf {
    PathBuf::from("abonnements.csv")
}

fn default_legacy_users_json() -> PathBuf {
    PathBuf::from("users.json")
}

fn default_legacy_predictions_json() -> PathBuf {
    PathBuf::from("pronos.json")
}
