//! Navigation host port.
//!
//! The imperative escape hatch into the navigation runtime, used only for
//! the one-shot account-setup redirect.

use crate::navigation::Route;

#[async_trait::async_trait]
pub trait NavigationHostPort: Send + Sync {
    /// Navigate to a route.
    ///
    /// No return value by contract: if the host is not yet mounted the
    /// command is dropped silently, never queued or retried. The declarative
    /// initial route is the source of truth for first render; this path only
    /// handles transitions after mount.
    async fn navigate_to(&self, route: Route);
}
