//! Tasks domain facade.

use std::sync::Arc;

use chrono::NaiveDate;

use super::dates::prompt_due_date;
use crate::console::Console;
use crate::entities::{is_storable_field, Task};
use crate::errors::{TrackerError, TrackerResult};
use crate::session::Session;
use crate::storage::Storage;
use crate::ui;

/// Aggregate counts shown to the admin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub total_tasks: usize,
    pub total_users: usize,
}

/// Tasks domain facade providing high-level task operations
pub struct TasksDomain {
    storage: Arc<dyn Storage>,
}

impl TasksDomain {
    /// Create a new tasks domain
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Interactively add a task created on `today`
    pub fn add_task(&self, console: &mut dyn Console, today: NaiveDate) -> TrackerResult<Task> {
        let users = self.storage.users()?;

        let assignee = loop {
            let username = console.read_line("Please enter the username to add a task to")?;
            if users.contains(&username) {
                break username;
            }
            console.write(&ui::error_banner(&format!(
                "{username} does not exist, please try again"
            )));
        };

        let title = read_field(console, "Please enter the title of the task", "Titles")?;
        let description = read_field(
            console,
            "Please enter the description of the task",
            "Descriptions",
        )?;
        let due_date = prompt_due_date(console, today)?;

        let task = Task::new(assignee, title, description, today, due_date);
        self.storage.append_task(&task)?;

        tracing::info!(user = %task.assignee, title = %task.title, "Added task");
        console.write(&ui::confirm_banner(&format!(
            "{} has been added to {}'s tasks",
            task.title, task.assignee
        )));
        Ok(task)
    }

    /// Tasks for one user, or every task grouped by user
    pub fn list_tasks(&self, username: Option<&str>) -> TrackerResult<Vec<Task>> {
        let book = self.storage.tasks()?;
        let tasks = match username {
            Some(user) => book.for_user(user).map(<[Task]>::to_vec).unwrap_or_default(),
            None => book.iter().cloned().collect(),
        };
        Ok(tasks)
    }

    /// Print task cards for one user or for everyone
    pub fn view_tasks(&self, console: &mut dyn Console, username: Option<&str>) -> TrackerResult<()> {
        let tasks = self.list_tasks(username)?;

        if tasks.is_empty() {
            let message = if username.is_some() {
                "You currently have no tasks assigned to you"
            } else {
                "There are no tasks to display"
            };
            console.write(&ui::info(message));
            return Ok(());
        }

        for task in &tasks {
            console.write(&ui::task_card(task));
        }
        Ok(())
    }

    /// Count tasks and registered users
    pub fn statistics(&self) -> TrackerResult<Statistics> {
        let book = self.storage.tasks()?;
        let users = self.storage.users()?;
        Ok(Statistics {
            total_tasks: book.total_tasks(),
            total_users: users.len(),
        })
    }

    /// Print the statistics table. Admin only.
    pub fn view_statistics(
        &self,
        console: &mut dyn Console,
        session: &Session,
    ) -> TrackerResult<Statistics> {
        if !session.is_admin() {
            return Err(TrackerError::PermissionDenied {
                action: "view statistics".to_string(),
            });
        }

        let stats = self.statistics()?;
        console.write(&format!(
            "*** Task Manager Statistics ***\n{}",
            ui::statistics_table(stats.total_tasks, stats.total_users)
        ));
        Ok(stats)
    }
}

/// Prompt for a free-text field that fits in one record column
fn read_field(console: &mut dyn Console, prompt: &str, label: &str) -> TrackerResult<String> {
    loop {
        let value = console.read_line(prompt)?;
        if is_storable_field(&value) {
            return Ok(value);
        }
        console.write(&ui::error_banner(&format!(
            "{label} cannot contain \", \", please try again"
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::entities::{format_date, TrackerConfig, User};
    use crate::storage::{FileStorage, StoreKind};
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> (TempDir, Arc<FileStorage>, TasksDomain) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Arc::new(FileStorage::new(temp_dir.path(), &TrackerConfig::default()));
        storage.append_user(&User::new("admin", "admin123")).unwrap();
        storage.append_user(&User::new("sam", "pw")).unwrap();
        let domain = TasksDomain::new(Arc::clone(&storage) as Arc<dyn Storage>);
        (temp_dir, storage, domain)
    }

    #[test]
    fn test_add_task_writes_record() {
        let (_temp_dir, storage, domain) = setup();
        let today = date(2024, 1, 1);
        let mut console = ScriptedConsole::new(["admin", "Demo", "desc", "01 01 2024"]);

        let task = domain.add_task(&mut console, today).unwrap();

        assert_eq!(task.start_date, today);
        assert_eq!(task.due_date, today);
        let lines = storage.read_all(StoreKind::Tasks).unwrap();
        assert_eq!(
            lines.last().unwrap(),
            "admin, Demo, desc, 01 Jan 2024, 01 Jan 2024, No"
        );
        assert!(console.printed("Demo has been added to admin's tasks"));
    }

    #[test]
    fn test_add_task_reprompts_for_unknown_user() {
        let (_temp_dir, _storage, domain) = setup();
        let mut console = ScriptedConsole::new(["ghost", "sam", "T", "D", "10 01 2024"]);

        let task = domain.add_task(&mut console, date(2024, 1, 1)).unwrap();

        assert_eq!(task.assignee, "sam");
        assert!(console.printed("ghost does not exist, please try again"));
        assert_eq!(format_date(task.due_date), "10 Jan 2024");
    }

    #[test]
    fn test_add_task_rejects_delimiter_in_title() {
        let (_temp_dir, storage, domain) = setup();
        let mut console =
            ScriptedConsole::new(["sam", "Fix, then ship", "Fix and ship", "D", "01 01 2024"]);

        let task = domain.add_task(&mut console, date(2024, 1, 1)).unwrap();

        assert_eq!(task.title, "Fix and ship");
        assert!(console.printed("Titles cannot contain"));
        assert_eq!(storage.tasks().unwrap().total_tasks(), 1);
    }

    #[test]
    fn test_list_tasks_in_insertion_order() {
        let (_temp_dir, _storage, domain) = setup();
        let today = date(2024, 1, 1);
        for (user, title) in [("sam", "one"), ("admin", "two"), ("sam", "three")] {
            let mut console = ScriptedConsole::new([user, title, "d", "02 01 2024"]);
            domain.add_task(&mut console, today).unwrap();
        }

        let sam: Vec<String> = domain
            .list_tasks(Some("sam"))
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(sam, vec!["one", "three"]);

        let all: Vec<String> = domain
            .list_tasks(None)
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(all, vec!["one", "three", "two"]);
    }

    #[test]
    fn test_view_tasks_without_tasks() {
        let (_temp_dir, _storage, domain) = setup();
        let mut console = ScriptedConsole::new(Vec::<String>::new());

        domain.view_tasks(&mut console, Some("sam")).unwrap();
        domain.view_tasks(&mut console, None).unwrap();

        assert!(console.printed("You currently have no tasks assigned to you"));
        assert!(console.printed("There are no tasks to display"));
    }

    #[test]
    fn test_statistics_counts() {
        let (_temp_dir, storage, domain) = setup();
        let day = date(2024, 1, 1);
        storage.append_task(&Task::new("sam", "a", "", day, day)).unwrap();
        storage.append_task(&Task::new("sam", "b", "", day, day)).unwrap();
        storage.append_task(&Task::new("admin", "c", "", day, day)).unwrap();

        let stats = domain.statistics().unwrap();
        assert_eq!(
            stats,
            Statistics {
                total_tasks: 3,
                total_users: 2
            }
        );
    }

    #[test]
    fn test_view_statistics_requires_admin() {
        let (_temp_dir, _storage, domain) = setup();
        let mut console = ScriptedConsole::new(Vec::<String>::new());

        assert!(matches!(
            domain
                .view_statistics(&mut console, &Session::new("sam", "admin"))
                .unwrap_err(),
            TrackerError::PermissionDenied { .. }
        ));
        let stats = domain
            .view_statistics(&mut console, &Session::new("admin", "admin"))
            .unwrap();
        assert_eq!(stats.total_users, 2);
        assert!(console.printed("Task Manager Statistics"));
    }
}
