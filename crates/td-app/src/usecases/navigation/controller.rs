//! Navigation controller.
//!
//! Drives the router state machine from session snapshots and executes the
//! resulting side effects against the navigation host.

use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};

use td_core::navigation::{
    initial_route, NavigationState, Route, RouterAction, RouterState, RouterStateMachine,
};
use td_core::ports::{NavigationEventPort, NavigationHostPort, SessionSourcePort};
use td_core::session::SessionSignals;

use crate::usecases::navigation::RouterContext;

/// Controller that reconciles session snapshots into navigation decisions.
///
/// Snapshots arrive serialized (one queueing channel, one consumer task);
/// each dispatch runs transition + effects + state update atomically under
/// the context's dispatch lock, so no interleaving is possible within one
/// recomputation.
pub struct NavigationController {
    context: Arc<RouterContext>,
    navigation_host: Arc<dyn NavigationHostPort>,
    events: Arc<dyn NavigationEventPort>,
}

impl NavigationController {
    pub fn new(
        navigation_host: Arc<dyn NavigationHostPort>,
        events: Arc<dyn NavigationEventPort>,
    ) -> Self {
        Self {
            context: RouterContext::default().arc(),
            navigation_host,
            events,
        }
    }

    /// Shared context, for shells that read state directly.
    pub fn context(&self) -> Arc<RouterContext> {
        Arc::clone(&self.context)
    }

    /// Current top-level navigation state.
    pub async fn current_state(&self) -> NavigationState {
        self.context.get_state().await.decision
    }

    /// Seed the controller at navigator mount time and return the
    /// declarative initial route.
    ///
    /// The redirect guard starts armed: a session already settled with zero
    /// accounts at mount gets its one-shot redirect from the first dispatch,
    /// since the initial route is the tab root for every authenticated
    /// state. A command dispatched before the host mounts is dropped by
    /// contract, never queued.
    pub async fn mount(&self, signals: &SessionSignals) -> Route {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let state = RouterState::at_mount(signals);
        info!(decision = ?state.decision, "navigation mounted");
        self.context.set_state(state).await;
        self.events
            .emit_navigation_state_changed(state.decision)
            .await;
        initial_route(state.decision)
    }

    /// Apply one session snapshot.
    ///
    /// Returns the resulting top-level state. Has no error conditions: the
    /// derivation is total, and the imperative redirect is fire-and-forget
    /// by contract (an unmounted host drops it silently).
    pub async fn dispatch(&self, signals: SessionSignals) -> NavigationState {
        // Serialize concurrent dispatch calls so two snapshots can never
        // read the same guard state and double-fire the redirect.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.navigation_controller.dispatch");
        async {
            let current = self.context.get_state().await;
            let (next, actions) = RouterStateMachine::transition(current, &signals);
            if next.decision != current.decision {
                info!(from = ?current.decision, to = ?next.decision, "navigation state transition");
            }

            self.execute_actions(actions).await;
            self.context.set_state(next).await;
            if next.decision != current.decision {
                self.events
                    .emit_navigation_state_changed(next.decision)
                    .await;
            }

            next.decision
        }
        .instrument(span)
        .await
    }

    /// Consume session snapshots until the source closes.
    ///
    /// The single consumer of the session subscription. The channel queues
    /// every published snapshot, so a logout that lands while an earlier
    /// dispatch is still executing its effects is dispatched afterwards
    /// instead of being lost: the guard re-arm depends on observing that
    /// discrete event.
    pub async fn run(self: Arc<Self>, session: Arc<dyn SessionSourcePort>) {
        let mut rx = session.subscribe();
        // Dispatch the snapshot current at subscribe time as well:
        // idempotent for an unchanged decision, and closes the window
        // between mount and subscription.
        self.dispatch(session.snapshot()).await;
        while let Some(signals) = rx.recv().await {
            self.dispatch(signals).await;
        }
        debug!("session source closed, navigation controller stopping");
    }

    async fn execute_actions(&self, actions: Vec<RouterAction>) {
        for action in actions {
            debug!(?action, "navigation executing action");
            match action {
                RouterAction::RedirectToAccountSetup => {
                    self.navigation_host.navigate_to(Route::CreateAccount).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use td_core::session::Credential;
    use tokio::sync::mpsc;

    #[derive(Default)]
    struct RecordingHost {
        commands: Mutex<Vec<Route>>,
    }

    impl RecordingHost {
        fn commands(&self) -> Vec<Route> {
            self.commands.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl NavigationHostPort for RecordingHost {
        async fn navigate_to(&self, route: Route) {
            self.commands.lock().unwrap().push(route);
        }
    }

    /// Host whose navigation takes a while, like a real animated runtime.
    struct SlowHost {
        delay: Duration,
        inner: RecordingHost,
    }

    #[async_trait::async_trait]
    impl NavigationHostPort for SlowHost {
        async fn navigate_to(&self, route: Route) {
            tokio::time::sleep(self.delay).await;
            self.inner.navigate_to(route).await;
        }
    }

    #[derive(Default)]
    struct RecordingEvents {
        states: Mutex<Vec<NavigationState>>,
    }

    impl RecordingEvents {
        fn states(&self) -> Vec<NavigationState> {
            self.states.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl NavigationEventPort for RecordingEvents {
        async fn emit_navigation_state_changed(&self, state: NavigationState) {
            self.states.lock().unwrap().push(state);
        }
    }

    /// Session source whose snapshots are pushed by the test.
    struct ScriptedSession {
        tx: mpsc::UnboundedSender<SessionSignals>,
        rx: Mutex<Option<mpsc::UnboundedReceiver<SessionSignals>>>,
        current: Mutex<SessionSignals>,
    }

    impl ScriptedSession {
        fn new() -> Self {
            let (tx, rx) = mpsc::unbounded_channel();
            Self {
                tx,
                rx: Mutex::new(Some(rx)),
                current: Mutex::new(SessionSignals::unauthenticated()),
            }
        }

        fn publish(&self, signals: SessionSignals) {
            *self.current.lock().unwrap() = signals.clone();
            self.tx.send(signals).unwrap();
        }
    }

    #[async_trait::async_trait]
    impl SessionSourcePort for ScriptedSession {
        fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionSignals> {
            self.rx
                .lock()
                .unwrap()
                .take()
                .expect("single subscriber in tests")
        }

        fn snapshot(&self) -> SessionSignals {
            self.current.lock().unwrap().clone()
        }

        async fn login(&self, _credential: Credential) -> anyhow::Result<()> {
            Ok(())
        }

        async fn logout(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn controller() -> (
        NavigationController,
        Arc<RecordingHost>,
        Arc<RecordingEvents>,
    ) {
        let host = Arc::new(RecordingHost::default());
        let events = Arc::new(RecordingEvents::default());
        let controller = NavigationController::new(host.clone(), events.clone());
        (controller, host, events)
    }

    async fn wait_for_commands(host: &RecordingHost, count: usize) {
        for _ in 0..100 {
            if host.commands().len() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    #[tokio::test]
    async fn mount_returns_login_route_for_logged_out_session() {
        let (controller, host, _) = controller();

        let route = controller.mount(&SessionSignals::unauthenticated()).await;
        assert_eq!(route, Route::Login);
        assert_eq!(
            controller.current_state().await,
            NavigationState::Unauthenticated
        );
        assert!(host.commands().is_empty());
    }

    #[tokio::test]
    async fn dispatch_redirects_exactly_once_per_setup_entry() {
        let (controller, host, _) = controller();
        controller.mount(&SessionSignals::unauthenticated()).await;

        controller.dispatch(SessionSignals::loading(true)).await;
        assert!(host.commands().is_empty(), "no redirect while loading");

        controller.dispatch(SessionSignals::ready(Vec::new())).await;
        assert_eq!(host.commands(), vec![Route::CreateAccount]);

        // Re-render with identical signals: suppressed.
        controller.dispatch(SessionSignals::ready(Vec::new())).await;
        assert_eq!(host.commands().len(), 1);
    }

    #[tokio::test]
    async fn unchanged_decision_emits_no_event() {
        let (controller, _, events) = controller();
        controller.mount(&SessionSignals::unauthenticated()).await;
        assert_eq!(events.states().len(), 1);

        controller.dispatch(SessionSignals::unauthenticated()).await;
        assert_eq!(events.states().len(), 1, "no event for a no-op snapshot");
    }

    #[tokio::test]
    async fn mount_in_needs_setup_redirects_on_first_dispatch() {
        let (controller, host, _) = controller();

        // Already settled with zero accounts at mount: the initial route is
        // still the tab root, so the redirect must come imperatively.
        let signals = SessionSignals::ready(Vec::new());
        let route = controller.mount(&signals).await;
        assert_eq!(route, Route::main_tabs());
        assert_eq!(
            controller.current_state().await,
            NavigationState::NeedsAccountSetup
        );

        controller.dispatch(signals.clone()).await;
        assert_eq!(host.commands(), vec![Route::CreateAccount]);

        // One-shot: further snapshots in the same episode stay quiet.
        controller.dispatch(signals).await;
        assert_eq!(host.commands().len(), 1);
    }

    #[tokio::test]
    async fn run_consumes_snapshots_in_publication_order() {
        let session = Arc::new(ScriptedSession::new());

        let (controller, host, _) = controller();
        controller.mount(&session.snapshot()).await;
        let controller = Arc::new(controller);
        let task = tokio::spawn(controller.clone().run(session.clone()));

        session.publish(SessionSignals::loading(true));
        session.publish(SessionSignals::ready(Vec::new()));

        wait_for_commands(&host, 1).await;
        assert_eq!(host.commands(), vec![Route::CreateAccount]);
        assert_eq!(
            controller.current_state().await,
            NavigationState::NeedsAccountSetup
        );

        task.abort();
    }

    #[tokio::test]
    async fn run_observes_a_logout_published_during_a_slow_dispatch() {
        let session = Arc::new(ScriptedSession::new());

        let host = Arc::new(SlowHost {
            delay: Duration::from_millis(100),
            inner: RecordingHost::default(),
        });
        let events = Arc::new(RecordingEvents::default());
        let controller = Arc::new(NavigationController::new(host.clone(), events));
        controller.mount(&session.snapshot()).await;
        let task = tokio::spawn(controller.clone().run(session.clone()));

        // First account-less login fires the redirect; while its slow
        // navigate is still in flight, the user logs out and a second
        // account-less user logs in.
        session.publish(SessionSignals::ready(Vec::new()));
        tokio::time::sleep(Duration::from_millis(20)).await;
        session.publish(SessionSignals::unauthenticated());
        session.publish(SessionSignals::ready(Vec::new()));

        wait_for_commands(&host.inner, 2).await;
        let redirects = host
            .inner
            .commands()
            .into_iter()
            .filter(|route| *route == Route::CreateAccount)
            .count();
        assert_eq!(
            redirects, 2,
            "the queued logout must re-arm the guard for the second login"
        );

        task.abort();
    }
}
