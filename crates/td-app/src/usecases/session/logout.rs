use std::sync::Arc;

use tracing::info;

use td_core::ports::SessionSourcePort;

/// Use case for ending the current session.
pub struct Logout {
    session: Arc<dyn SessionSourcePort>,
}

impl Logout {
    pub fn new(session: Arc<dyn SessionSourcePort>) -> Self {
        Self { session }
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        info!("logout requested");
        self.session.logout().await
    }
}
