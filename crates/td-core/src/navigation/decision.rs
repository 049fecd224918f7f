//! Pure navigation decision.
//!
//! No IO, no async, no time: a total function from a session snapshot to a
//! navigation state.

use crate::navigation::NavigationState;
use crate::session::SessionSignals;

/// Derive the top-level navigation state from a session snapshot.
///
/// Precedence order, first match wins:
///
/// 1. accounts still loading → [`NavigationState::Loading`]
/// 2. authenticated, zero accounts → [`NavigationState::NeedsAccountSetup`]
/// 3. authenticated → [`NavigationState::Ready`]
/// 4. otherwise → [`NavigationState::Unauthenticated`]
///
/// Loading must dominate everything else: while the account list is in
/// flight, an empty `accounts` is not evidence of anything, and classifying
/// an existing user as "needs setup" from it would redirect them to account
/// creation they never asked for.
pub fn decide(signals: &SessionSignals) -> NavigationState {
    if signals.is_loading_accounts {
        return NavigationState::Loading;
    }
    if signals.is_authenticated && signals.accounts.is_empty() {
        return NavigationState::NeedsAccountSetup;
    }
    if signals.is_authenticated {
        return NavigationState::Ready;
    }
    NavigationState::Unauthenticated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Account;

    fn signals(
        is_authenticated: bool,
        is_loading_accounts: bool,
        account_count: usize,
    ) -> SessionSignals {
        SessionSignals {
            is_authenticated,
            is_loading_accounts,
            accounts: (0..account_count)
                .map(|i| Account::new(format!("Account {i}")))
                .collect(),
        }
    }

    #[test]
    fn decide_covers_every_signal_combination() {
        use NavigationState::*;

        // (is_authenticated, is_loading_accounts, account_count) -> expected
        let table = [
            (false, false, 0, Unauthenticated),
            (false, false, 1, Unauthenticated),
            (false, true, 0, Loading),
            (false, true, 1, Loading),
            (true, false, 0, NeedsAccountSetup),
            (true, false, 1, Ready),
            (true, true, 0, Loading),
            (true, true, 1, Loading),
        ];

        for (auth, loading, count, expected) in table {
            let got = decide(&signals(auth, loading, count));
            assert_eq!(
                got, expected,
                "auth={auth} loading={loading} accounts={count}"
            );
        }
    }

    #[test]
    fn decide_loading_dominates_needs_setup() {
        // An authenticated user with an empty account list must not be
        // classified as needing setup while the list is still in flight.
        let got = decide(&signals(true, true, 0));
        assert_eq!(got, NavigationState::Loading);
    }

    #[test]
    fn decide_is_deterministic() {
        let snapshot = signals(true, false, 0);
        assert_eq!(decide(&snapshot), decide(&snapshot));
    }
}
