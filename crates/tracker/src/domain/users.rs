//! User registration and store bootstrap.

use std::sync::Arc;

use crate::console::Console;
use crate::entities::{is_storable_field, TrackerConfig, User};
use crate::errors::{TrackerError, TrackerResult};
use crate::session::Session;
use crate::storage::Storage;
use crate::ui;

/// Users domain facade
pub struct UsersDomain {
    storage: Arc<dyn Storage>,
}

impl UsersDomain {
    /// Create a new users domain
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Register a new user. Admin only.
    pub fn register_user(&self, console: &mut dyn Console, session: &Session) -> TrackerResult<User> {
        if !session.is_admin() {
            return Err(TrackerError::PermissionDenied {
                action: "register a user".to_string(),
            });
        }

        let existing = self.storage.users()?;
        let username = loop {
            let candidate = console.read_line("Please enter the username you wish to register")?;
            if candidate.is_empty() {
                console.write(&ui::error_banner("A username is required, please try again"));
            } else if !is_storable_field(&candidate) {
                console.write(&ui::error_banner(
                    "Usernames cannot contain \", \", please try another...",
                ));
            } else if existing.contains(&candidate) {
                console.write(&ui::error_banner("User already in use, please try another..."));
            } else {
                break candidate;
            }
        };

        let password = loop {
            let password =
                console.read_secret(&format!("Please enter a password for {username}"))?;
            let confirmation = console.read_secret("Please confirm the password again")?;

            if password != confirmation {
                console.write(&ui::error_banner(
                    "Your passwords did not match, please try again",
                ));
            } else if !is_storable_field(&password) {
                console.write(&ui::error_banner(
                    "Passwords cannot contain \", \", please try again",
                ));
            } else {
                break password;
            }
        };

        let user = User::new(username, password);
        self.storage.append_user(&user)?;

        tracing::info!(user = %user.username, by = %session.username, "Registered user");
        console.write(&ui::confirm_banner(&format!(
            "{} has successfully been registered",
            user.username
        )));
        Ok(user)
    }

    /// Write the configured admin account into an empty user store.
    ///
    /// Returns `true` when an account was written.
    pub fn ensure_bootstrap_admin(&self, config: &TrackerConfig) -> TrackerResult<bool> {
        let Some(password) = &config.bootstrap_password else {
            return Ok(false);
        };
        if !self.storage.users()?.is_empty() {
            return Ok(false);
        }

        self.storage
            .append_user(&User::new(config.admin_username.clone(), password.clone()))?;
        tracing::warn!(
            user = %config.admin_username,
            "User store was empty; created the bootstrap admin account"
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::storage::FileStorage;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Arc<FileStorage>) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Arc::new(FileStorage::new(temp_dir.path(), &TrackerConfig::default()));
        storage.append_user(&User::new("admin", "admin123")).unwrap();
        (temp_dir, storage)
    }

    fn admin() -> Session {
        Session::new("admin", "admin")
    }

    #[test]
    fn test_register_user() {
        let (_temp_dir, storage) = setup();
        let users = UsersDomain::new(Arc::clone(&storage) as Arc<dyn Storage>);
        let mut console = ScriptedConsole::new(["sam", "pw", "pw"]);

        let user = users.register_user(&mut console, &admin()).unwrap();

        assert_eq!(user, User::new("sam", "pw"));
        assert!(storage.users().unwrap().contains("sam"));
        assert!(console.printed("sam has successfully been registered"));
    }

    #[test]
    fn test_register_rejects_duplicates_case_sensitively() {
        let (_temp_dir, storage) = setup();
        let users = UsersDomain::new(Arc::clone(&storage) as Arc<dyn Storage>);
        let mut console = ScriptedConsole::new(["admin", "admin", "Admin", "pw", "pw"]);

        let user = users.register_user(&mut console, &admin()).unwrap();

        assert_eq!(user.username, "Admin");
        assert_eq!(console.printed_count("User already in use"), 2);
        assert_eq!(storage.users().unwrap().len(), 2);
    }

    #[test]
    fn test_register_repeats_until_passwords_match() {
        let (_temp_dir, storage) = setup();
        let users = UsersDomain::new(Arc::clone(&storage) as Arc<dyn Storage>);
        let mut console = ScriptedConsole::new(["sam", "one", "two", "three", "three"]);

        let user = users.register_user(&mut console, &admin()).unwrap();

        assert_eq!(user.password, "three");
        assert!(console.printed("Your passwords did not match"));
        assert!(storage.users().unwrap().get("sam").unwrap().password_matches("three"));
    }

    #[test]
    fn test_register_rejects_delimiter_in_fields() {
        let (_temp_dir, storage) = setup();
        let users = UsersDomain::new(Arc::clone(&storage) as Arc<dyn Storage>);
        let mut console =
            ScriptedConsole::new(["", "sam, jr", "sam", "a, b", "a, b", "ab", "ab"]);

        let user = users.register_user(&mut console, &admin()).unwrap();

        assert_eq!(user, User::new("sam", "ab"));
        assert!(console.printed("A username is required"));
        assert!(console.printed("Usernames cannot contain"));
        assert!(console.printed("Passwords cannot contain"));
        // The store still parses cleanly
        assert_eq!(storage.users().unwrap().len(), 2);
    }

    #[test]
    fn test_register_requires_admin() {
        let (_temp_dir, storage) = setup();
        let users = UsersDomain::new(storage);
        let mut console = ScriptedConsole::new(["sam", "pw", "pw"]);

        let err = users
            .register_user(&mut console, &Session::new("sam", "admin"))
            .unwrap_err();

        assert!(matches!(err, TrackerError::PermissionDenied { .. }));
        assert_eq!(console.remaining(), 3);
    }

    #[test]
    fn test_bootstrap_only_fills_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let config = TrackerConfig::default();
        let storage = Arc::new(FileStorage::new(temp_dir.path(), &config));
        let users = UsersDomain::new(Arc::clone(&storage) as Arc<dyn Storage>);

        assert!(users.ensure_bootstrap_admin(&config).unwrap());
        assert!(!users.ensure_bootstrap_admin(&config).unwrap());

        let directory = storage.users().unwrap();
        assert_eq!(directory.len(), 1);
        assert!(directory.get("admin").unwrap().password_matches("admin123"));
    }

    #[test]
    fn test_bootstrap_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let config = TrackerConfig {
            bootstrap_password: None,
            ..TrackerConfig::default()
        };
        let storage = Arc::new(FileStorage::new(temp_dir.path(), &config));
        let users = UsersDomain::new(Arc::clone(&storage) as Arc<dyn Storage>);

        assert!(!users.ensure_bootstrap_admin(&config).unwrap());
        assert!(storage.users().unwrap().is_empty());
    }
}
