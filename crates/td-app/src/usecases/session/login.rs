use std::sync::Arc;

use tracing::info;

use td_core::ports::SessionSourcePort;
use td_core::session::Credential;

/// Use case for logging a user in.
///
/// Delegates to the session source, which owns all authentication IO and
/// publishes the resulting snapshots.
pub struct Login {
    session: Arc<dyn SessionSourcePort>,
}

impl Login {
    pub fn new(session: Arc<dyn SessionSourcePort>) -> Self {
        Self { session }
    }

    pub async fn execute(&self, credential: Credential) -> anyhow::Result<()> {
        info!(username = %credential.username, "login requested");
        self.session.login(credential).await
    }
}
