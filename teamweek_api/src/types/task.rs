//! Scheduling records: projects, tasks and milestones.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{is_false, is_zero, null_as_default, parse_date, parse_time, UserID};

pub type ProjectID = i64;
pub type TaskID = i64;
pub type MilestoneID = i64;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub id: ProjectID,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A scheduled block of work on a user's timeline.
///
/// Dates and times are kept as the strings the API sent; the `starts_on`,
/// `ends_on`, `starts_at` and `ends_at` accessors parse them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Task {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub id: TaskID,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub pinned: bool,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub done: bool,

    /// Owner of the task. Zero when the task is unassigned.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub user_id: UserID,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
}

impl Task {
    pub fn starts_on(&self) -> Option<NaiveDate> {
        parse_date(self.start_date.as_deref())
    }

    pub fn ends_on(&self) -> Option<NaiveDate> {
        parse_date(self.end_date.as_deref())
    }

    pub fn starts_at(&self) -> Option<NaiveTime> {
        parse_time(self.start_time.as_deref())
    }

    pub fn ends_at(&self) -> Option<NaiveTime> {
        parse_time(self.end_time.as_deref())
    }

    /// Inclusive length of the task in calendar days.
    pub fn duration_days(&self) -> Option<i64> {
        let days = (self.ends_on()? - self.starts_on()?).num_days();
        (days >= 0).then_some(days + 1)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Milestone {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub id: MilestoneID,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub done: bool,

    /// Holidays are rendered as blocked-out days rather than goals.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub holiday: bool,
}

impl Milestone {
    pub fn due_on(&self) -> Option<NaiveDate> {
        parse_date(self.date.as_deref())
    }
}
