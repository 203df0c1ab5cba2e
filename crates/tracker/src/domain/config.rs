//! Configuration domain facade.

use std::fs;
use std::path::{Path, PathBuf};

use crate::entities::TrackerConfig;
use crate::errors::{TrackerError, TrackerResult};

/// Name of the optional config file in the project directory
pub const CONFIG_FILE: &str = "tracker.json";

/// Configuration domain facade
pub struct ConfigDomain {
    config_path: PathBuf,
}

impl ConfigDomain {
    /// Create a new config domain
    pub fn new(project_path: impl AsRef<Path>) -> Self {
        Self {
            config_path: project_path.as_ref().join(CONFIG_FILE),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load(&self) -> TrackerResult<TrackerConfig> {
        match fs::read_to_string(&self.config_path) {
            Ok(content) => {
                let config: TrackerConfig = serde_json::from_str(&content)?;
                validate(&config)?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(TrackerConfig::default()),
            Err(e) => Err(TrackerError::FileReadError {
                path: self.config_path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Save configuration
    pub fn save(&self, config: &TrackerConfig) -> TrackerResult<()> {
        validate(config)?;

        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, content).map_err(|e| TrackerError::FileWriteError {
            path: self.config_path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

fn validate(config: &TrackerConfig) -> TrackerResult<()> {
    if config.admin_username.is_empty() {
        return Err(TrackerError::ConfigError {
            reason: "adminUsername must not be empty".to_string(),
        });
    }
    if !crate::entities::is_storable_field(&config.admin_username) {
        return Err(TrackerError::ConfigError {
            reason: "adminUsername must not contain \", \"".to_string(),
        });
    }
    if let Some(password) = &config.bootstrap_password {
        if !crate::entities::is_storable_field(password) {
            return Err(TrackerError::ConfigError {
                reason: "bootstrapPassword must not contain \", \"".to_string(),
            });
        }
    }
    Ok(())
}
