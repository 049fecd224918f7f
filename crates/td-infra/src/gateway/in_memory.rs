//! In-memory account gateway.
//!
//! A scriptable stand-in for the brokerage HTTP service layer, used by
//! integration tests and demos. Credentials and account fixtures are fixed
//! at construction; the account list can be mutated to simulate account
//! creation, and the next fetch can be scripted to fail.

use std::sync::Mutex;

use td_core::ports::{AccountGatewayPort, GatewayError};
use td_core::session::{Account, Credential};

pub struct InMemoryAccountGateway {
    username: String,
    secret: String,
    accounts: Mutex<Vec<Account>>,
    fail_next_fetch: Mutex<Option<String>>,
}

impl InMemoryAccountGateway {
    /// Gateway accepting exactly one credential pair.
    pub fn accepting(
        username: impl Into<String>,
        secret: impl Into<String>,
        accounts: Vec<Account>,
    ) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
            accounts: Mutex::new(accounts),
            fail_next_fetch: Mutex::new(None),
        }
    }

    /// Simulate account creation on the backend.
    pub fn add_account(&self, account: Account) {
        self.accounts.lock().unwrap().push(account);
    }

    pub fn set_accounts(&self, accounts: Vec<Account>) {
        *self.accounts.lock().unwrap() = accounts;
    }

    /// Make the next `list_accounts` fail with a backend error.
    pub fn fail_next_fetch(&self, message: impl Into<String>) {
        *self.fail_next_fetch.lock().unwrap() = Some(message.into());
    }
}

#[async_trait::async_trait]
impl AccountGatewayPort for InMemoryAccountGateway {
    async fn authenticate(&self, credential: &Credential) -> Result<(), GatewayError> {
        if credential.username == self.username && credential.secret.expose() == self.secret {
            Ok(())
        } else {
            Err(GatewayError::InvalidCredentials)
        }
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, GatewayError> {
        if let Some(message) = self.fail_next_fetch.lock().unwrap().take() {
            return Err(GatewayError::Backend(message));
        }
        Ok(self.accounts.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_wrong_credentials() {
        let gateway = InMemoryAccountGateway::accepting("maria", "hunter2", Vec::new());

        let result = gateway
            .authenticate(&Credential::new("maria", "wrong".to_string()))
            .await;
        assert!(matches!(result, Err(GatewayError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn scripted_fetch_failure_fires_once() {
        let gateway = InMemoryAccountGateway::accepting("maria", "hunter2", Vec::new());
        gateway.fail_next_fetch("backend unavailable");

        assert!(gateway.list_accounts().await.is_err());
        assert!(gateway.list_accounts().await.is_ok());
    }
}
