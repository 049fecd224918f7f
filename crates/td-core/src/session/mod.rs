//! Session domain module.
//!
//! Defines the session snapshot observed by the navigation controller, the
//! account entity, and the login credential type.

mod account;
mod credential;
mod signals;

pub use account::Account;
pub use credential::{Credential, SecretString};
pub use signals::SessionSignals;
