//! TradeDeck Application Orchestration Layer
//!
//! This crate contains the navigation controller and session use cases.

pub mod usecases;

pub use usecases::navigation::{NavigationController, RouterContext};
pub use usecases::session::{Login, Logout};
