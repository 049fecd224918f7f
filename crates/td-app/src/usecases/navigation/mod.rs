//! Navigation use cases.
//!
//! The controller that drives the router state machine from session
//! snapshots, and the shared context holding its state.

pub mod context;
pub mod controller;

pub use context::RouterContext;
pub use controller::NavigationController;
