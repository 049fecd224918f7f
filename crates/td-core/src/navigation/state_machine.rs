//! Router state machine.
//!
//! Defines a pure transition function from the previous controller state and
//! a fresh session snapshot to the next state and its side effects. Callable
//! from any event loop; nothing here depends on a particular UI runtime.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::navigation::{decide, EdgeGuard, NavigationState};
use crate::session::SessionSignals;

/// The full state owned by the navigation controller.
///
/// `decision` is a pure derivation of the last observed snapshot; `guard` is
/// the only genuinely mutable bit, remembering whether the one-shot setup
/// redirect already fired for the current episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterState {
    pub decision: NavigationState,
    pub guard: EdgeGuard,
}

impl RouterState {
    /// Controller state for a freshly mounted navigator.
    ///
    /// The guard always starts armed, including when the mount-time decision
    /// is already `NeedsAccountSetup`: the initial route lands on the main
    /// tabs, so it is the first dispatch that pushes the setup screen.
    pub fn at_mount(signals: &SessionSignals) -> Self {
        Self {
            decision: decide(signals),
            guard: EdgeGuard::armed(),
        }
    }
}

impl Default for RouterState {
    fn default() -> Self {
        Self {
            decision: NavigationState::default(),
            guard: EdgeGuard::armed(),
        }
    }
}

/// Side-effects produced by router transitions.
///
/// Deliberately a single command with a single target: the one-shot redirect
/// is the only imperative escape hatch the controller owns, which keeps the
/// fire-exactly-once invariant auditable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouterAction {
    /// Navigate to the account-creation screen.
    RedirectToAccountSetup,
}

/// Pure router state machine: no side effects, no error conditions.
pub struct RouterStateMachine;

impl RouterStateMachine {
    /// Apply one session snapshot to the controller state.
    ///
    /// Total over the signal domain: every snapshot maps to exactly one next
    /// state. The redirect action is emitted only on the transition *into*
    /// `NeedsAccountSetup` while the guard is armed; repeated snapshots in
    /// that state are suppressed, and leaving it re-arms the guard.
    pub fn transition(
        state: RouterState,
        signals: &SessionSignals,
    ) -> (RouterState, Vec<RouterAction>) {
        let decision = decide(signals);
        let (guard, fire) = state.guard.observe(decision.needs_setup());

        let actions = if fire {
            vec![RouterAction::RedirectToAccountSetup]
        } else {
            Vec::new()
        };

        if decision != state.decision {
            debug!(from = ?state.decision, to = ?decision, redirect = fire, "router transition");
        }

        (RouterState { decision, guard }, actions)
    }
}
