//! VIP content handlers.
//!
//! ## Commands
//! - Publishing the prediction list (admin)
//!
//! ## Queries
//! - Reading VIP content through the session gate

mod get_vip_content;
mod publish_predictions;

pub use get_vip_content::{GetVipContentHandler, GetVipContentQuery};
pub use publish_predictions::{PublishPredictionsCommand, PublishPredictionsHandler};
