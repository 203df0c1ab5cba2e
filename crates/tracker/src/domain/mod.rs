//! Domain facades for the tracker.
//!
//! These facades combine storage operations with the interactive
//! prompts and validation rules of each workflow.

mod auth;
mod config;
pub mod dates;
mod tasks;
mod users;

pub use auth::{AuthDomain, LoginOutcome};
pub use config::{ConfigDomain, CONFIG_FILE};
pub use dates::{parse_due_date, prompt_due_date, DateRejection};
pub use tasks::{Statistics, TasksDomain};
pub use users::UsersDomain;
