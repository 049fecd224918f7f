use serde::{Deserialize, Serialize};

use crate::session::Account;

/// Atomic snapshot of session state observed by the navigation controller.
///
/// The session source publishes this tuple as a single value, never as
/// independently-observable fields, so the controller can never mix signal
/// values from two different points in time (e.g. `accounts` from after a
/// logout with `is_authenticated` from before it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSignals {
    /// Whether a user is currently authenticated.
    pub is_authenticated: bool,
    /// Whether the account list is still being fetched. While true the
    /// contents of `accounts` must not be trusted.
    pub is_loading_accounts: bool,
    /// The authenticated user's brokerage accounts. Empty until loaded.
    pub accounts: Vec<Account>,
}

impl SessionSignals {
    /// Snapshot for a logged-out session.
    pub fn unauthenticated() -> Self {
        Self {
            is_authenticated: false,
            is_loading_accounts: false,
            accounts: Vec::new(),
        }
    }

    /// Snapshot while the account list is in flight.
    ///
    /// Also the normalization target for any transient, malformed session
    /// state: unknown account data is always represented as
    /// `{ accounts: [], is_loading_accounts: true }`.
    pub fn loading(is_authenticated: bool) -> Self {
        Self {
            is_authenticated,
            is_loading_accounts: true,
            accounts: Vec::new(),
        }
    }

    /// Settled snapshot for an authenticated session.
    pub fn ready(accounts: Vec<Account>) -> Self {
        Self {
            is_authenticated: true,
            is_loading_accounts: false,
            accounts,
        }
    }

    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }
}

impl Default for SessionSignals {
    fn default() -> Self {
        Self::unauthenticated()
    }
}
