//! File-based storage implementation.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use super::traits::{Storage, StoreKind};
use crate::entities::TrackerConfig;
use crate::errors::{TrackerError, TrackerResult};

/// File-based storage implementation
pub struct FileStorage {
    /// Path to the user store (user.txt)
    users_file: PathBuf,

    /// Path to the task store (tasks.txt)
    tasks_file: PathBuf,
}

impl FileStorage {
    /// Create a new file storage instance
    ///
    /// Relative store paths in `config` resolve against `project_path`.
    pub fn new(project_path: impl AsRef<Path>, config: &TrackerConfig) -> Self {
        let project_path = project_path.as_ref();
        Self {
            users_file: project_path.join(&config.users_file),
            tasks_file: project_path.join(&config.tasks_file),
        }
    }

    /// Create a storage instance over explicit store paths
    pub fn with_paths(users_file: impl Into<PathBuf>, tasks_file: impl Into<PathBuf>) -> Self {
        Self {
            users_file: users_file.into(),
            tasks_file: tasks_file.into(),
        }
    }

    /// Path backing a store
    pub fn path(&self, store: StoreKind) -> &Path {
        match store {
            StoreKind::Users => &self.users_file,
            StoreKind::Tasks => &self.tasks_file,
        }
    }

    /// Open a store for reading and appending, creating it when missing
    fn open(&self, store: StoreKind) -> TrackerResult<File> {
        let path = self.path(store);
        OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| TrackerError::FileReadError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
    }
}

impl Storage for FileStorage {
    fn storage_type(&self) -> &'static str {
        "file"
    }

    fn read_all(&self, store: StoreKind) -> TrackerResult<Vec<String>> {
        let mut file = self.open(store)?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| TrackerError::FileReadError {
                path: self.path(store).display().to_string(),
                reason: e.to_string(),
            })?;

        let lines: Vec<String> = content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();

        tracing::debug!(store = %store, lines = lines.len(), "Read store");
        Ok(lines)
    }

    fn append(&self, store: StoreKind, record: &str) -> TrackerResult<()> {
        let path = self.path(store);
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| TrackerError::FileWriteError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        file.write_all(format!("\n{record}").as_bytes())
            .map_err(|e| TrackerError::FileWriteError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(store = %store, "Appended record");
        Ok(())
    }
}
