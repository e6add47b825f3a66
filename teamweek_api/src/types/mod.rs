//! Record types returned by the Teamweek v3 API.
//!
//! Every field carries a serde default, so attributes the API omits decode to
//! their zero value. Empty fields are skipped again when a record is
//! serialized.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer};

mod account;
pub use self::account::{Account, AccountID};

mod user;
pub use self::user::{Profile, User, UserID};

mod task;
pub use self::task::{Milestone, MilestoneID, Project, ProjectID, Task, TaskID};

mod group;
pub use self::group::{Group, GroupID, Membership, MembershipID};

/// Decodes an explicit `null` as the field's zero value, the same as an
/// absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}

fn is_false(v: &bool) -> bool {
    !*v
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

/// RFC 3339 timestamp, e.g. `2015-03-01T12:00:00Z`.
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<FixedOffset>> {
    non_empty(raw).and_then(|s| DateTime::parse_from_rfc3339(s).ok())
}

/// Calendar date, e.g. `2015-03-01`.
fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    non_empty(raw).and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

/// Wall-clock time with or without seconds.
fn parse_time(raw: Option<&str>) -> Option<NaiveTime> {
    non_empty(raw).and_then(|s| {
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .ok()
    })
}
