#![warn(clippy::pedantic)]
// Allow common pedantic lints that don't affect correctness
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

//! # Tracker
//!
//! A single-session command-line task tracker.
//!
//! This crate provides:
//! - Flat-file user and task stores (`user.txt`, `tasks.txt`)
//! - Login against the user store with an admin role
//! - Adding tasks with a validated due date, and listing them per user
//! - Admin-only user registration and statistics
//! - A menu state machine driven through a [`Console`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tracker::{App, FileStorage, TerminalConsole, TrackerConfig};
//!
//! let config = TrackerConfig::default();
//! let storage = Arc::new(FileStorage::new(".", &config));
//! let mut app = App::new(storage, &config, TerminalConsole::new());
//! app.run()?;
//! ```

// Core entities
pub mod entities;

// Error types
pub mod errors;

// Storage layer
pub mod storage;

// Domain facades
pub mod domain;

// Console input/output
pub mod console;

// Logged-in session context
pub mod session;

// Menu state machine
pub mod menu;

// Terminal UI helpers
pub mod ui;

// Re-export key types for convenience
pub use console::{Console, ScriptedConsole, TerminalConsole};
pub use entities::{Completion, Task, TaskBook, TrackerConfig, User, UserDirectory};
pub use errors::{RecordError, TrackerError, TrackerResult};
pub use menu::{App, MenuChoice, MenuState};
pub use session::{Role, Session};
pub use storage::{FileStorage, Storage, StoreKind};
