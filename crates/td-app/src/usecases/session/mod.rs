//! Session use cases.
//!
//! Thin capability wrappers over the session source; the navigation
//! controller itself never calls these, it only reacts to the snapshots
//! they cause.

pub mod login;
pub mod logout;

pub use login::Login;
pub use logout::Logout;
