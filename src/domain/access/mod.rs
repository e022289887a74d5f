//! Access domain module.
//!
//! Pure access rules: no storage, no clock. Callers supply the subscription
//! snapshot and the calendar date.
//!
//! # Module Structure
//!
//! - `admin_set` - Configured administrator emails
//! - `decision` - AccessDecision with grant/denial reasons
//! - `errors` - AccessError for access use cases
//! - `policy` - AccessPolicy evaluation order

mod admin_set;
mod decision;
mod errors;
mod policy;

pub use admin_set::AdminSet;
pub use decision::{AccessDecision, DenialReason, GrantReason};
pub use errors::AccessError;
pub use policy::AccessPolicy;
