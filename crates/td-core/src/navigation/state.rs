use serde::{Deserialize, Serialize};

/// Top-level navigation state derived from session signals.
///
/// Exactly one value is current at any instant, and it is a deterministic,
/// total function of the session snapshot (see [`crate::navigation::decide`]).
/// The value is recomputed on every snapshot change and never cached, so it
/// cannot go stale.
///
/// State transitions cycle for the lifetime of the process; there is no
/// terminal state:
///
/// ```text
/// Unauthenticated ──login──→ Loading ──→ Ready
///        ↑                      │          │
///        │                      └──→ NeedsAccountSetup ──→ Ready
///        └───────────logout────────────────┴──────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationState {
    /// The account list is still in flight; account status is unknown.
    Loading,

    /// No authenticated user; the login subtree is shown.
    Unauthenticated,

    /// Authenticated with zero accounts; the user must create one.
    NeedsAccountSetup,

    /// Authenticated with at least one account; the main tab root is shown.
    Ready,
}

impl NavigationState {
    /// Whether this state is rendered inside the authenticated shell.
    ///
    /// `Loading`, `NeedsAccountSetup` and `Ready` all mount the same tab
    /// navigator root; only `Unauthenticated` swaps to the login subtree.
    pub fn is_authenticated_shell(self) -> bool {
        !matches!(self, Self::Unauthenticated)
    }

    /// Whether this state requires the one-shot account-setup redirect.
    pub fn needs_setup(self) -> bool {
        self == Self::NeedsAccountSetup
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::Loading
    }
}
