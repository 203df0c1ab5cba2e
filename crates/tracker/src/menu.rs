//! Menu state machine driving a session from login to exit.

use std::sync::Arc;

use chrono::Local;

use crate::console::Console;
use crate::domain::{AuthDomain, TasksDomain, UsersDomain};
use crate::entities::TrackerConfig;
use crate::errors::TrackerResult;
use crate::session::{Role, Session};
use crate::storage::Storage;
use crate::ui;

/// Where the session currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    AwaitingLogin,
    MainLoop(Session),
    Exited,
}

/// A menu option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Statistics,
    AddTask,
    ViewAll,
    ViewMine,
    Exit,
}

impl MenuChoice {
    /// Parse menu input for a role.
    ///
    /// Admin-only options entered by anyone else are treated as unknown.
    pub fn parse(input: &str, role: Role) -> Option<Self> {
        match (input.trim().to_lowercase().as_str(), role) {
            ("r", Role::Admin) => Some(Self::Register),
            ("s", Role::Admin) => Some(Self::Statistics),
            ("a", _) => Some(Self::AddTask),
            ("va", _) => Some(Self::ViewAll),
            ("vm", _) => Some(Self::ViewMine),
            ("e", _) => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive application
pub struct App<C> {
    console: C,
    auth: AuthDomain,
    users: UsersDomain,
    tasks: TasksDomain,
    admin_username: String,
}

impl<C: Console> App<C> {
    pub fn new(storage: Arc<dyn Storage>, config: &TrackerConfig, console: C) -> Self {
        Self {
            console,
            auth: AuthDomain::new(Arc::clone(&storage)),
            users: UsersDomain::new(Arc::clone(&storage)),
            tasks: TasksDomain::new(storage),
            admin_username: config.admin_username.clone(),
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Greet, then step from login until the user exits
    pub fn run(&mut self) -> TrackerResult<()> {
        self.console.write(&ui::welcome());

        let mut state = MenuState::AwaitingLogin;
        while state != MenuState::Exited {
            state = self.step(state)?;
        }
        Ok(())
    }

    /// Perform a single state transition
    pub fn step(&mut self, state: MenuState) -> TrackerResult<MenuState> {
        match state {
            MenuState::AwaitingLogin => {
                let username = self.auth.login(&mut self.console)?;
                let session = Session::new(username, &self.admin_username);
                tracing::debug!(user = %session.username, role = %session.role, "Session started");
                Ok(MenuState::MainLoop(session))
            }
            MenuState::MainLoop(session) => {
                self.console.write(&ui::menu(session.role));
                let input = self.console.read_line(":")?;

                match MenuChoice::parse(&input, session.role) {
                    Some(MenuChoice::Exit) => {
                        self.console.write("Goodbye!!!");
                        Ok(MenuState::Exited)
                    }
                    Some(choice) => {
                        self.dispatch(&session, choice)?;
                        Ok(MenuState::MainLoop(session))
                    }
                    None => {
                        tracing::debug!(input = %input, "Invalid menu input");
                        self.console.write(&ui::error_banner(
                            "You have entered an invalid input. Please try again",
                        ));
                        Ok(MenuState::MainLoop(session))
                    }
                }
            }
            MenuState::Exited => Ok(MenuState::Exited),
        }
    }

    fn dispatch(&mut self, session: &Session, choice: MenuChoice) -> TrackerResult<()> {
        match choice {
            MenuChoice::Register => {
                self.users.register_user(&mut self.console, session)?;
            }
            MenuChoice::Statistics => {
                self.tasks.view_statistics(&mut self.console, session)?;
                self.return_to_menu()?;
            }
            MenuChoice::AddTask => {
                let today = Local::now().date_naive();
                self.tasks.add_task(&mut self.console, today)?;
            }
            MenuChoice::ViewAll => {
                self.tasks.view_tasks(&mut self.console, None)?;
                self.return_to_menu()?;
            }
            MenuChoice::ViewMine => {
                self.tasks
                    .view_tasks(&mut self.console, Some(&session.username))?;
                self.return_to_menu()?;
            }
            MenuChoice::Exit => {}
        }
        Ok(())
    }

    fn return_to_menu(&mut self) -> TrackerResult<()> {
        self.console.read_line("Press enter to return to menu")?;
        Ok(())
    }
}
