//! User entity and the parsed user store.

use indexmap::IndexMap;

use super::{split_record, FIELD_DELIMITER};
use crate::errors::RecordError;

/// A registered user. Passwords are kept in plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl User {
    /// Create a new user
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Parse a `username, password` line
    pub fn from_record(record: &str) -> Result<Self, RecordError> {
        let fields = split_record(record, 2)?;
        Ok(Self::new(fields[0], fields[1]))
    }

    /// Serialize to a store line
    pub fn to_record(&self) -> String {
        [self.username.as_str(), self.password.as_str()].join(FIELD_DELIMITER)
    }

    /// Exact, case-sensitive password comparison
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Users keyed by username, in the order they first appear in the store
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: IndexMap<String, User>,
}

impl UserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user. A repeated username replaces the earlier password.
    pub fn insert(&mut self, user: User) {
        self.users.insert(user.username.clone(), user);
    }

    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Number of distinct usernames
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }
}
