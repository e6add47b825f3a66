//! People: the caller's own profile and the members of an account.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{is_false, is_zero, null_as_default, parse_timestamp, Account};

/// Numeric identifier for a user.
pub type UserID = i64;

/// The authenticated user, returned by `me.json`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub id: UserID,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub email: String,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub initials: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub has_picture: bool,

    /// Hex color used for the user's avatar, e.g. `#f4a300`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Accounts the user belongs to.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<Account>,

    /// Pending invitations. Their shape is not documented, so they are kept
    /// as raw JSON.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub invitations: Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Profile {
    pub fn created(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(self.created_at.as_deref())
    }

    pub fn updated(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(self.updated_at.as_deref())
    }
}

/// A member of an account, returned by `{account}/users.json`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub id: UserID,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub email: String,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub initials: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub has_picture: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Position of the user in the account's timeline.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub weight: i64,

    /// Placeholder users stand in for people without a login.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub dummy: bool,
}
