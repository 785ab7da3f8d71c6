//! Accounts: credentials, signup/login, and the current session.

pub mod errors;
pub mod models;
mod service;

pub use errors::{LoginError, SignupError};
pub use models::{Credential, Session};
pub use service::AccountsService;
