//! Storage trait definitions.

use crate::entities::{Task, TaskBook, User, UserDirectory};
use crate::errors::{TrackerError, TrackerResult};

/// The two record stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    Users,
    Tasks,
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Users => write!(f, "user store"),
            Self::Tasks => write!(f, "task store"),
        }
    }
}

/// Storage interface for record persistence.
///
/// Implementations hold no cache; every call reflects what is on disk.
pub trait Storage: Send + Sync {
    /// Get storage type identifier
    fn storage_type(&self) -> &'static str;

    /// Every line of a store, split on newline
    fn read_all(&self, store: StoreKind) -> TrackerResult<Vec<String>>;

    /// Append one serialized record as a new line
    fn append(&self, store: StoreKind, record: &str) -> TrackerResult<()>;

    // === Parsed views ===

    /// Parse the user store into a directory keyed by username
    fn users(&self) -> TrackerResult<UserDirectory> {
        let mut users = UserDirectory::new();
        for (line, record) in records(self.read_all(StoreKind::Users)?) {
            let user = User::from_record(&record).map_err(|source| {
                TrackerError::MalformedRecord {
                    store: StoreKind::Users.to_string(),
                    line,
                    source,
                }
            })?;
            users.insert(user);
        }
        Ok(users)
    }

    /// Parse the task store into tasks grouped by assignee
    fn tasks(&self) -> TrackerResult<TaskBook> {
        let mut book = TaskBook::new();
        for (line, record) in records(self.read_all(StoreKind::Tasks)?) {
            let task = Task::from_record(&record).map_err(|source| {
                TrackerError::MalformedRecord {
                    store: StoreKind::Tasks.to_string(),
                    line,
                    source,
                }
            })?;
            book.push(task);
        }
        Ok(book)
    }

    // === Writes ===

    fn append_user(&self, user: &User) -> TrackerResult<()> {
        self.append(StoreKind::Users, &user.to_record())
    }

    fn append_task(&self, task: &Task) -> TrackerResult<()> {
        self.append(StoreKind::Tasks, &task.to_record())
    }
}

/// Non-blank lines with their 1-based line numbers
fn records(lines: Vec<String>) -> impl Iterator<Item = (usize, String)> {
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line))
}
