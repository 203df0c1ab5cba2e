//! Terminal UI helpers for menus, banners and task display.
//!
//! Everything here renders to a `String`; callers hand the result to a
//! [`Console`](crate::console::Console).

use colored::Colorize;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::entities::{format_date, Completion, Task};
use crate::session::Role;

const BANNER_WIDTH: usize = 59;
const CARD_WIDTH: usize = 71;

/// Greeting shown before login
pub fn welcome() -> String {
    "*** Welcome to Task Manager ***".cyan().bold().to_string()
}

/// Bordered banner for recoverable input mistakes
pub fn error_banner(message: &str) -> String {
    let rule = "!".repeat(BANNER_WIDTH).red().to_string();
    format!("{rule}\n    {message}\n{rule}")
}

/// Bordered banner confirming a completed action
pub fn confirm_banner(message: &str) -> String {
    let rule = "* ".repeat(BANNER_WIDTH / 2).trim_end().green().to_string();
    format!("{rule}\n    {message}\n{rule}")
}

/// Plain informational line
pub fn info(message: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), message)
}

/// Menu options for a role
pub fn menu(role: Role) -> String {
    let mut lines = vec!["Select one of the following options:".bold().to_string()];
    if role == Role::Admin {
        lines.push("r   - register a user".to_string());
        lines.push("s   - view statistics".to_string());
    }
    lines.push("a   - add task".to_string());
    lines.push("va  - view all tasks".to_string());
    lines.push("vm  - view my tasks".to_string());
    lines.push("e   - exit".to_string());
    lines.join("\n")
}

/// Full task card
pub fn task_card(task: &Task) -> String {
    let rule = "-".repeat(CARD_WIDTH).dimmed().to_string();
    let complete = match task.complete {
        Completion::Yes => task.complete.to_string().green().to_string(),
        Completion::No => task.complete.to_string().yellow().to_string(),
    };

    format!(
        "{rule}\n\
         Task:               {}\n\
         Assigned to:        {}\n\
         Date assigned:      {}\n\
         Due date:           {}\n\
         Task complete:      {}\n\
         Task Description:\n    {}\n\
         {rule}",
        task.title.bold(),
        task.assignee,
        format_date(task.start_date),
        format_date(task.due_date),
        complete,
        task.description,
    )
}

/// Statistics table shown to the admin
pub fn statistics_table(total_tasks: usize, total_users: usize) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Statistic").fg(Color::Cyan),
        Cell::new("Count").fg(Color::Cyan),
    ]);
    table.add_row(vec![Cell::new("Total tasks"), Cell::new(total_tasks)]);
    table.add_row(vec![Cell::new("Total users"), Cell::new(total_users)]);

    table
}
