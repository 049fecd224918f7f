//! Navigation runtime adapters.

mod events;
mod host;

pub use events::BroadcastNavigationEvents;
pub use host::StackNavigationHost;
