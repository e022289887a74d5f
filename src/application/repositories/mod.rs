//! Repositories: cached, write-through views over the record store.
//!
//! Each repository holds an immutable snapshot behind `RwLock<Arc<_>>` and
//! serializes its writers with a `Mutex`. A failed write leaves the snapshot
//! untouched.

mod credentials;
mod error;
mod predictions;
mod subscriptions;

pub use credentials::{CredentialMap, CredentialRepository};
pub use error::RepositoryError;
pub use predictions::PredictionRepository;
pub use subscriptions::SubscriptionRepository;
