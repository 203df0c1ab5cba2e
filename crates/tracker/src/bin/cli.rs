//! Tracker CLI - interactive task tracker.

#![warn(clippy::pedantic)]
#![allow(clippy::disallowed_macros)]

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tracker::domain::{ConfigDomain, UsersDomain};
use tracker::errors::TrackerResult;
use tracker::storage::{FileStorage, Storage};
use tracker::{ui, App, TerminalConsole};

#[derive(Parser)]
#[command(name = "tracker")]
#[command(about = "Interactive task tracker backed by flat text files", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding tracker.json and the store files
    #[arg(long)]
    project: Option<PathBuf>,
}

fn get_project_path(cli_path: Option<PathBuf>) -> PathBuf {
    cli_path.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", ui::error_banner(&e.to_string()));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> TrackerResult<()> {
    let project_path = get_project_path(cli.project);
    let config = ConfigDomain::new(&project_path).load()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(&project_path, &config));
    tracing::debug!(
        project = %project_path.display(),
        storage = storage.storage_type(),
        "Opened stores"
    );

    UsersDomain::new(Arc::clone(&storage)).ensure_bootstrap_admin(&config)?;

    let mut app = App::new(storage, &config, TerminalConsole::new());
    app.run()
}
