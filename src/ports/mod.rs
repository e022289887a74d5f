//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `RecordStore` - Whole-dataset persistence with atomic writes
//! - `SubscriptionSource` - One storage generation in the subscription fallback chain
//! - `SessionTokens` - Issuing and validating session tokens

mod record_store;
mod session_tokens;
mod subscription_source;

pub use record_store::{read_rows, read_typed, write_typed, RecordStore, RecordStoreError};
pub use session_tokens::{IssuedToken, SessionTokens};
pub use subscription_source::{SourceOutcome, SubscriptionSource};
