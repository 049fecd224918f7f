use serde::{Deserialize, Serialize};

use crate::ids::AccountId;

/// A brokerage account.
///
/// Opaque to the navigation controller beyond its existence: only the number
/// of accounts in a session snapshot feeds the navigation decision. Contents
/// are owned by the account service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub display_name: String,
}

impl Account {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: AccountId::new(),
            display_name: display_name.into(),
        }
    }
}
