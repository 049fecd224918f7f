use std::sync::Arc;

use tokio::sync::Mutex;
use td_core::navigation::RouterState;

/// Shared router context containing state and dispatch lock.
///
/// Shared between [`super::NavigationController`] and any shell code that
/// needs to read the current state.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: serializes `dispatch` calls so one snapshot's
///   transition + effects + state update runs atomically.
/// - `state`: used for both reading (`get_state`) and writing (during
///   `dispatch`). `get_state` does NOT touch `dispatch_lock`.
#[derive(Clone)]
pub struct RouterContext {
    /// Current router state.
    state: Arc<Mutex<RouterState>>,
    /// Serializes dispatch calls to prevent concurrent state/action races.
    dispatch_lock: Arc<Mutex<()>>,
}

impl RouterContext {
    /// Creates a new RouterContext with the given initial state.
    pub fn new(initial_state: RouterState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Returns the current state.
    ///
    /// Lightweight read; does NOT acquire `dispatch_lock`.
    pub async fn get_state(&self) -> RouterState {
        *self.state.lock().await
    }

    /// Acquires the dispatch lock for serializing concurrent dispatch calls.
    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Updates the state to the given value.
    ///
    /// Only called while holding `dispatch_lock`.
    pub async fn set_state(&self, state: RouterState) {
        *self.state.lock().await = state;
    }
}

impl Default for RouterContext {
    fn default() -> Self {
        Self::new(RouterState::default())
    }
}
