use crate::navigation::NavigationState;

/// Outbound notification seam for UI shells that render the current
/// top-level state (loading indicator, subtree selection).
#[async_trait::async_trait]
pub trait NavigationEventPort: Send + Sync {
    async fn emit_navigation_state_changed(&self, state: NavigationState);
}
