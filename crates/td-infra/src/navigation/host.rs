//! In-memory stack navigation host.
//!
//! Models the navigation runtime: a route stack rooted at a declaratively
//! chosen initial route, plus the imperative `navigate_to` escape hatch.

use tokio::sync::Mutex;
use tracing::{debug, info};

use td_core::navigation::Route;
use td_core::ports::NavigationHostPort;

#[derive(Debug)]
struct MountedStack {
    stack: Vec<Route>,
    /// Every route ever pushed, including the initial one. Kept for shells
    /// and tests that assert on command sequences.
    history: Vec<Route>,
}

/// Stack navigator state. Unmounted until `mount` is called.
pub struct StackNavigationHost {
    inner: Mutex<Option<MountedStack>>,
}

impl StackNavigationHost {
    /// An unmounted host; imperative commands are dropped until `mount`.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    /// Mount the navigator rooted at the given initial route.
    ///
    /// Remounting replaces the whole stack (the top-level subtree swap on
    /// login/logout).
    pub async fn mount(&self, initial: Route) {
        let mut inner = self.inner.lock().await;
        info!(route = initial.name(), "navigator mounted");
        *inner = Some(MountedStack {
            stack: vec![initial.clone()],
            history: vec![initial],
        });
    }

    /// Pop the top route. The root route is never popped.
    pub async fn pop(&self) -> Option<Route> {
        let mut inner = self.inner.lock().await;
        let mounted = inner.as_mut()?;
        if mounted.stack.len() > 1 {
            mounted.stack.pop()
        } else {
            None
        }
    }

    /// The route currently on top, if mounted.
    pub async fn current(&self) -> Option<Route> {
        self.inner
            .lock()
            .await
            .as_ref()
            .and_then(|m| m.stack.last().cloned())
    }

    /// All routes pushed since mount, in order.
    pub async fn history(&self) -> Vec<Route> {
        self.inner
            .lock()
            .await
            .as_ref()
            .map(|m| m.history.clone())
            .unwrap_or_default()
    }

    pub async fn is_mounted(&self) -> bool {
        self.inner.lock().await.is_some()
    }
}

impl Default for StackNavigationHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl NavigationHostPort for StackNavigationHost {
    async fn navigate_to(&self, route: Route) {
        let mut inner = self.inner.lock().await;
        match inner.as_mut() {
            Some(mounted) => {
                debug!(route = route.name(), "navigate");
                mounted.stack.push(route.clone());
                mounted.history.push(route);
            }
            None => {
                // Contract: not mounted means drop silently, never queue.
                debug!(route = route.name(), "navigate dropped, host not mounted");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn commands_before_mount_are_dropped() {
        let host = StackNavigationHost::new();
        host.navigate_to(Route::CreateAccount).await;

        assert!(!host.is_mounted().await);
        assert!(host.history().await.is_empty());

        // Mounting afterwards starts from a clean stack: the dropped
        // command was not queued.
        host.mount(Route::main_tabs()).await;
        assert_eq!(host.history().await, vec![Route::main_tabs()]);
    }

    #[tokio::test]
    async fn navigate_pushes_onto_the_mounted_stack() {
        let host = StackNavigationHost::new();
        host.mount(Route::main_tabs()).await;

        host.navigate_to(Route::StockDetail {
            symbol: "AAPL".into(),
        })
        .await;

        assert_eq!(
            host.current().await,
            Some(Route::StockDetail {
                symbol: "AAPL".into()
            })
        );
    }

    #[tokio::test]
    async fn pop_never_removes_the_root() {
        let host = StackNavigationHost::new();
        host.mount(Route::main_tabs()).await;
        host.navigate_to(Route::CreateAccount).await;

        assert_eq!(host.pop().await, Some(Route::CreateAccount));
        assert_eq!(host.pop().await, None);
        assert_eq!(host.current().await, Some(Route::main_tabs()));
    }

    #[tokio::test]
    async fn remount_replaces_the_stack() {
        let host = StackNavigationHost::new();
        host.mount(Route::main_tabs()).await;
        host.navigate_to(Route::CreateAccount).await;

        host.mount(Route::Login).await;
        assert_eq!(host.current().await, Some(Route::Login));
        assert_eq!(host.history().await, vec![Route::Login]);
    }
}
