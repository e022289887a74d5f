//! Authentication handlers.
//!
//! ## Commands
//! - Registering a user credential
//! - Logging in (credentials plus subscription check)

mod login;
mod register_user;

pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use register_user::{
    RegisterUserCommand, RegisterUserHandler, RegisterUserResult, MIN_PASSWORD_LEN,
};
