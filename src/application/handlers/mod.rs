//! Application handlers.
//!
//! Command and query handlers that orchestrate repositories, the validity
//! oracle and the session gate.

pub mod auth;
pub mod subscription;
pub mod vip;

pub use auth::{
    LoginCommand, LoginHandler, LoginResult, RegisterUserCommand, RegisterUserHandler,
    RegisterUserResult,
};
pub use subscription::{
    AddSubscriptionCommand, AddSubscriptionHandler, AddSubscriptionResult,
    ListSubscriptionsHandler, ListSubscriptionsQuery, ListSubscriptionsResult, SubscriptionStatus,
};
pub use vip::{
    GetVipContentHandler, GetVipContentQuery, PublishPredictionsCommand,
    PublishPredictionsHandler,
};
