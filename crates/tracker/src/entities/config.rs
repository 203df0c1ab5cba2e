//! Configuration entities.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Tracker configuration, read from `tracker.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// User store, relative to the project directory unless absolute
    #[serde(default = "default_users_file", rename = "usersFile")]
    pub users_file: PathBuf,

    /// Task store, relative to the project directory unless absolute
    #[serde(default = "default_tasks_file", rename = "tasksFile")]
    pub tasks_file: PathBuf,

    /// Username that gets the admin menu
    #[serde(default = "default_admin_username", rename = "adminUsername")]
    pub admin_username: String,

    /// Password for the admin account written to an empty user store.
    /// `null` disables bootstrapping.
    #[serde(
        default = "default_bootstrap_password",
        rename = "bootstrapPassword"
    )]
    pub bootstrap_password: Option<String>,

    /// Default log directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level", rename = "logLevel")]
    pub log_level: String,
}

fn default_users_file() -> PathBuf {
    PathBuf::from("user.txt")
}

fn default_tasks_file() -> PathBuf {
    PathBuf::from("tasks.txt")
}

fn default_admin_username() -> String {
    "admin".to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_bootstrap_password() -> Option<String> {
    Some("admin123".to_string())
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            users_file: default_users_file(),
            tasks_file: default_tasks_file(),
            admin_username: default_admin_username(),
            bootstrap_password: default_bootstrap_password(),
            log_level: default_log_level(),
        }
    }
}

impl TrackerConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }
}
