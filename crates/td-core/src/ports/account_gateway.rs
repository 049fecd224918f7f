//! Account gateway port.
//!
//! The seam in front of the brokerage HTTP service layer. Only the session
//! source calls this; the navigation controller never performs IO itself.

use crate::session::{Account, Credential};

/// Errors surfaced by the account gateway.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("network error: {0}")]
    Network(String),
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait::async_trait]
pub trait AccountGatewayPort: Send + Sync {
    /// Verify a credential against the brokerage backend.
    async fn authenticate(&self, credential: &Credential) -> Result<(), GatewayError>;

    /// Fetch the authenticated user's account list.
    async fn list_accounts(&self) -> Result<Vec<Account>, GatewayError>;
}
