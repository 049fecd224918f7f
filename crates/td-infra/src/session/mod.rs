//! Session source adapters.

mod auth_session;

pub use auth_session::AuthSession;
