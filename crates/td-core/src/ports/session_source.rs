//! Session source port.
//!
//! The reactive provider of session snapshots. Implementations own all
//! session IO (login, token refresh, account fetch); the navigation
//! controller only observes the resolved snapshots.

use tokio::sync::mpsc;

use crate::session::{Credential, SessionSignals};

#[async_trait::async_trait]
pub trait SessionSourcePort: Send + Sync {
    /// Subscribe to session snapshots.
    ///
    /// Every published snapshot is delivered, in publication order: the
    /// channel queues, it never coalesces. A logout between two logins is a
    /// discrete event the controller must observe (it re-arms the redirect
    /// guard), so implementations must not collapse it into the following
    /// snapshot. Each received value is one atomic tuple; subscribers can
    /// never observe `is_authenticated`, `is_loading_accounts` and
    /// `accounts` from different points in time.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionSignals>;

    /// The most recently published snapshot.
    fn snapshot(&self) -> SessionSignals;

    /// Authenticate and start loading the account list.
    async fn login(&self, credential: Credential) -> anyhow::Result<()>;

    /// End the session and publish an unauthenticated snapshot.
    async fn logout(&self) -> anyhow::Result<()>;
}
