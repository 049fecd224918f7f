//! Navigation event emitter.

use tokio::sync::broadcast;
use tracing::debug;

use td_core::navigation::NavigationState;
use td_core::ports::NavigationEventPort;

/// Broadcasts navigation state changes to any number of UI subscribers.
///
/// Lagging subscribers lose old states, not the current one; the state is a
/// level, so only the latest value matters.
pub struct BroadcastNavigationEvents {
    tx: broadcast::Sender<NavigationState>,
}

impl BroadcastNavigationEvents {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NavigationState> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastNavigationEvents {
    fn default() -> Self {
        Self::new(16)
    }
}

#[async_trait::async_trait]
impl NavigationEventPort for BroadcastNavigationEvents {
    async fn emit_navigation_state_changed(&self, state: NavigationState) {
        debug!(?state, "navigation state changed");
        // No subscribers is fine; the emit is fire-and-forget.
        let _ = self.tx.send(state);
    }
}
