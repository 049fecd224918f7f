use serde::{Deserialize, Serialize};

/// One-shot memory for the account-setup redirect.
///
/// The navigation state is recomputed on every session snapshot, but the
/// imperative redirect must fire exactly once per transition *into*
/// `NeedsAccountSetup`, not once per recomputation while that state
/// persists. This is an edge detector, not a level detector: while the user
/// is legitimately filling out the account-creation form, repeated snapshots
/// must not redirect them again.
///
/// Lifetime is one authenticated episode: the guard re-arms as soon as the
/// condition that fired it becomes false (accounts created, or logout), so a
/// later account-less login fires again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeGuard {
    fired: bool,
}

impl EdgeGuard {
    /// A guard that has not fired; the next rising edge fires.
    pub fn armed() -> Self {
        Self { fired: false }
    }

    pub fn has_fired(self) -> bool {
        self.fired
    }

    /// Observe the current level and return `(next_guard, fire)`.
    ///
    /// `fire` is true only on the rising edge: level high while armed.
    /// A high level after firing is suppressed; a low level re-arms.
    pub fn observe(self, needs_setup: bool) -> (Self, bool) {
        match (needs_setup, self.fired) {
            (true, false) => (Self { fired: true }, true),
            (false, true) => (Self { fired: false }, false),
            _ => (self, false),
        }
    }
}
