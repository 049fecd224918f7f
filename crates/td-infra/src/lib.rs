//! TradeDeck Infrastructure Layer
//!
//! Adapter implementations of the td-core ports: the auth session source,
//! the in-memory stack navigation host, event emitters, and the in-memory
//! account gateway used by tests and demos.

pub mod gateway;
pub mod navigation;
pub mod session;

pub use gateway::InMemoryAccountGateway;
pub use navigation::{BroadcastNavigationEvents, StackNavigationHost};
pub use session::AuthSession;
