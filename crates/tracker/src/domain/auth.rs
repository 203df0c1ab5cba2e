//! Login against the user store.

use std::sync::Arc;

use crate::console::Console;
use crate::errors::TrackerResult;
use crate::storage::Storage;
use crate::ui;

/// Result of checking one username/password pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted,
    UnknownUser,
    WrongPassword,
}

/// Auth domain facade
pub struct AuthDomain {
    storage: Arc<dyn Storage>,
}

impl AuthDomain {
    /// Create a new auth domain
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Check credentials against the current user store
    pub fn check_credentials(&self, username: &str, password: &str) -> TrackerResult<LoginOutcome> {
        let users = self.storage.users()?;
        let outcome = match users.get(username) {
            None => LoginOutcome::UnknownUser,
            Some(user) if user.password_matches(password) => LoginOutcome::Granted,
            Some(_) => LoginOutcome::WrongPassword,
        };
        Ok(outcome)
    }

    /// Prompt for credentials until a valid pair is entered
    pub fn login(&self, console: &mut dyn Console) -> TrackerResult<String> {
        loop {
            let username = console.read_line("Please enter your username")?;
            let password = console.read_secret("Please enter your password")?;

            match self.check_credentials(&username, &password)? {
                LoginOutcome::Granted => {
                    tracing::info!(user = %username, "Login succeeded");
                    console.write(&ui::confirm_banner(&format!("Welcome {username}")));
                    return Ok(username);
                }
                LoginOutcome::UnknownUser => {
                    tracing::warn!(user = %username, "Login for unknown user");
                    console.write(&ui::error_banner(
                        "Your username does not exist, please contact your admin",
                    ));
                }
                LoginOutcome::WrongPassword => {
                    tracing::warn!(user = %username, "Login with incorrect password");
                    console.write(&ui::error_banner("You have entered the incorrect password"));
                }
            }
        }
    }
}
