//! Auth session source.
//!
//! Owns all session IO (authentication, account fetch) and publishes the
//! resulting snapshots as single atomic tuples, fanned out losslessly to
//! every subscriber.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

use td_core::ports::{AccountGatewayPort, GatewayError, SessionSourcePort};
use td_core::session::{Credential, SessionSignals};

/// Errors surfaced by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("authentication failed: {0}")]
    AuthenticationFailed(#[source] GatewayError),
    #[error("account fetch failed: {0}")]
    AccountFetchFailed(#[source] GatewayError),
}

/// In-process session source over an account gateway.
///
/// Every state change goes through `publish`, so observers only ever see
/// monotonically-consistent snapshots: `is_authenticated`,
/// `is_loading_accounts` and `accounts` always come from the same point in
/// time. Subscribers get a queueing channel that receives every snapshot in
/// publication order: a logout between two logins is a discrete event, never
/// coalesced into the snapshot that follows it.
pub struct AuthSession {
    gateway: Arc<dyn AccountGatewayPort>,
    current: std::sync::Mutex<SessionSignals>,
    subscribers: std::sync::Mutex<Vec<mpsc::UnboundedSender<SessionSignals>>>,
    /// Serializes login/logout/refresh so two operations can never publish
    /// interleaved snapshots.
    op_lock: Mutex<()>,
}

impl AuthSession {
    pub fn new(gateway: Arc<dyn AccountGatewayPort>) -> Self {
        Self {
            gateway,
            current: std::sync::Mutex::new(SessionSignals::unauthenticated()),
            subscribers: std::sync::Mutex::new(Vec::new()),
            op_lock: Mutex::new(()),
        }
    }

    /// Re-fetch the account list and publish the settled snapshot.
    ///
    /// Called after account creation, and to retry a failed fetch. A no-op
    /// for an unauthenticated session.
    pub async fn refresh_accounts(&self) -> Result<(), SessionError> {
        let _op_guard = self.op_lock.lock().await;

        if !self.snapshot().is_authenticated {
            debug!("refresh_accounts ignored: not authenticated");
            return Ok(());
        }

        self.publish(SessionSignals::loading(true));
        self.settle_accounts().await
    }

    /// Fetch accounts and publish the settled snapshot.
    ///
    /// On failure the last published snapshot (loading) stays current: a
    /// half-fetched account list is never surfaced, and the navigation
    /// decision keeps the loading screen until a retry settles.
    async fn settle_accounts(&self) -> Result<(), SessionError> {
        match self.gateway.list_accounts().await {
            Ok(accounts) => {
                debug!(count = accounts.len(), "account list settled");
                self.publish(SessionSignals::ready(accounts));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "account fetch failed, staying in loading snapshot");
                Err(SessionError::AccountFetchFailed(err))
            }
        }
    }

    fn publish(&self, signals: SessionSignals) {
        *self.current.lock().unwrap() = signals.clone();
        // Fan out to every live subscriber; closed queues are pruned.
        self.subscribers
            .lock()
            .unwrap()
            .retain(|tx| tx.send(signals.clone()).is_ok());
    }
}

#[async_trait::async_trait]
impl SessionSourcePort for AuthSession {
    fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionSignals> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }

    fn snapshot(&self) -> SessionSignals {
        self.current.lock().unwrap().clone()
    }

    async fn login(&self, credential: Credential) -> anyhow::Result<()> {
        let _op_guard = self.op_lock.lock().await;

        self.gateway
            .authenticate(&credential)
            .await
            .map_err(SessionError::AuthenticationFailed)?;
        info!(username = %credential.username, "session authenticated");

        // Authenticated, account list unknown: publish the loading snapshot
        // before the fetch so observers never see a stale account list.
        self.publish(SessionSignals::loading(true));
        self.settle_accounts().await?;
        Ok(())
    }

    async fn logout(&self) -> anyhow::Result<()> {
        let _op_guard = self.op_lock.lock().await;
        info!("session logged out");
        self.publish(SessionSignals::unauthenticated());
        Ok(())
    }
}
