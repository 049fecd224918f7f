use serde::{Deserialize, Serialize};

use super::impl_id;

/// Stable brokerage account identifier.
///
/// Identity and contents of an account are owned by the account service;
/// the navigation controller only ever counts accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl_id!(AccountId);
