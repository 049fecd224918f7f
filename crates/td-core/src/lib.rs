//! # td-core
//!
//! Core domain models and navigation logic for TradeDeck.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod ids;
pub mod navigation;
pub mod ports;
pub mod session;

// Re-export commonly used types at the crate root
pub use ids::AccountId;
pub use navigation::{
    EdgeGuard, MainTab, NavigationState, Route, RouterAction, RouterState, RouterStateMachine,
};
pub use session::{Account, Credential, SessionSignals};
