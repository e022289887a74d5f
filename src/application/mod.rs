//! Application layer - services, repositories, and command/query handlers.
//!
//! Startup runs the [`BootstrapResolver`] and loads the repositories; every
//! protected request then goes through the [`SessionGate`], which asks the
//! [`ValidityOracle`].

pub mod bootstrap;
pub mod context;
pub mod handlers;
pub mod repositories;
pub mod session_gate;
pub mod validity_oracle;

pub use bootstrap::{BootstrapOutcome, BootstrapResolver};
pub use context::AppContext;
pub use repositories::{
    CredentialMap, CredentialRepository, PredictionRepository, RepositoryError,
    SubscriptionRepository,
};
pub use session_gate::SessionGate;
pub use validity_oracle::ValidityOracle;
