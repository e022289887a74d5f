//! Repository-level errors.

use thiserror::Error;

use crate::domain::access::AccessError;
use crate::domain::foundation::Email;
use crate::ports::RecordStoreError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Storage(#[from] RecordStoreError),

    #[error("{0} is already registered")]
    AlreadyRegistered(Email),
}

impl From<RepositoryError> for AccessError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyRegistered(email) => AccessError::conflict(email),
            RepositoryError::Storage(e) => e.into(),
        }
    }
}

impl From<RecordStoreError> for AccessError {
    fn from(err: RecordStoreError) -> Self {
        tracing::error!(error = %err, "Dataset write failed");
        AccessError::storage(err.to_string())
    }
}
