//! Accounts: the tenant that owns users, projects and groups.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{is_false, is_zero, non_empty, null_as_default, parse_timestamp, Group};

/// Numeric identifier for an account.
pub type AccountID = i64;

/// An account visible to the current user, returned by `me/accounts.json`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Account {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub id: AccountID,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Demo accounts are sandbox tenants created at signup.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub is_demo: bool,

    /// Raw RFC 3339 timestamp; see [`Account::suspended_on`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended_at: Option<String>,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,
}

impl Account {
    /// When the account was suspended, if it was and the timestamp parses.
    pub fn suspended_on(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(self.suspended_at.as_deref())
    }

    pub fn is_suspended(&self) -> bool {
        non_empty(self.suspended_at.as_deref()).is_some()
    }
}
