use serde::{Deserialize, Serialize};

use super::{is_zero, null_as_default, AccountID, UserID};

pub type GroupID = i64;
pub type MembershipID = i64;

/// A named set of users inside an account.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Group {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub id: GroupID,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub account_id: AccountID,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub memberships: Vec<Membership>,
}

impl Group {
    /// Member user ids in display order (ascending weight).
    pub fn user_ids(&self) -> Vec<UserID> {
        let mut memberships: Vec<&Membership> = self.memberships.iter().collect();
        memberships.sort_by_key(|m| m.weight);
        memberships.into_iter().map(|m| m.user_id).collect()
    }
}

/// Links a user to a group.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Membership {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub id: MembershipID,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub group_id: GroupID,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub user_id: UserID,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub weight: i64,
}
