//! Task entity and related types.

use chrono::NaiveDate;
use indexmap::IndexMap;

use super::{split_record, FIELD_DELIMITER};
use crate::errors::{RecordError, TrackerError};

/// Stored date format, e.g. `05 Mar 2024`
pub const DATE_FORMAT: &str = "%d %b %Y";

/// Format a date the way it is written to the task store
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a stored `dd Mon yyyy` date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Task completion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Completion {
    Yes,
    #[default]
    No,
}

impl std::fmt::Display for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

impl std::str::FromStr for Completion {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(Self::Yes),
            "No" => Ok(Self::No),
            _ => Err(TrackerError::InvalidCompletion {
                value: s.to_string(),
            }),
        }
    }
}

/// A task assigned to a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Username the task is assigned to
    pub assignee: String,

    pub title: String,

    pub description: String,

    /// Date the task was created
    pub start_date: NaiveDate,

    pub due_date: NaiveDate,

    pub complete: Completion,
}

impl Task {
    /// Create a new, incomplete task
    pub fn new(
        assignee: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            assignee: assignee.into(),
            title: title.into(),
            description: description.into(),
            start_date,
            due_date,
            complete: Completion::No,
        }
    }

    /// Parse an `assignee, title, description, start, due, complete` line
    pub fn from_record(record: &str) -> Result<Self, RecordError> {
        let fields = split_record(record, 6)?;

        let start_date = parse_date(fields[3]).ok_or_else(|| RecordError::InvalidField {
            field: "start date",
            value: fields[3].to_string(),
        })?;
        let due_date = parse_date(fields[4]).ok_or_else(|| RecordError::InvalidField {
            field: "due date",
            value: fields[4].to_string(),
        })?;
        let complete = fields[5]
            .parse::<Completion>()
            .map_err(|_| RecordError::InvalidField {
                field: "completion flag",
                value: fields[5].to_string(),
            })?;

        Ok(Self {
            assignee: fields[0].to_string(),
            title: fields[1].to_string(),
            description: fields[2].to_string(),
            start_date,
            due_date,
            complete,
        })
    }

    /// Serialize to a store line
    pub fn to_record(&self) -> String {
        [
            self.assignee.clone(),
            self.title.clone(),
            self.description.clone(),
            format_date(self.start_date),
            format_date(self.due_date),
            self.complete.to_string(),
        ]
        .join(FIELD_DELIMITER)
    }

    pub fn is_complete(&self) -> bool {
        self.complete == Completion::Yes
    }
}

/// Tasks grouped by assignee.
///
/// Assignees keep the order in which they first appear in the store and each
/// list keeps file order.
#[derive(Debug, Clone, Default)]
pub struct TaskBook {
    by_user: IndexMap<String, Vec<Task>>,
}

impl TaskBook {
    /// Create an empty task book
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task to its assignee's list
    pub fn push(&mut self, task: Task) {
        self.by_user
            .entry(task.assignee.clone())
            .or_default()
            .push(task);
    }

    /// Tasks assigned to one user, if any
    pub fn for_user(&self, username: &str) -> Option<&[Task]> {
        self.by_user.get(username).map(Vec::as_slice)
    }

    /// All tasks, grouped by user
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.by_user.values().flatten()
    }

    /// Sum of every user's task count
    pub fn total_tasks(&self) -> usize {
        self.by_user.values().map(Vec::len).sum()
    }

    /// Number of users with at least one task
    pub fn assignee_count(&self) -> usize {
        self.by_user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_user.is_empty()
    }
}
