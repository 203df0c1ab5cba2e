//! Console input/output used by the interactive flows.
//!
//! This module uses println! for CLI output, which is appropriate
//! for terminal user interfaces.

#![allow(clippy::disallowed_macros)]

use std::collections::VecDeque;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

use crate::errors::{TrackerError, TrackerResult};

/// Line-oriented console the menu and domain flows talk to
pub trait Console {
    /// Prompt for one line of free text
    fn read_line(&mut self, prompt: &str) -> TrackerResult<String>;

    /// Prompt for a secret; terminals hide the typed characters
    fn read_secret(&mut self, prompt: &str) -> TrackerResult<String>;

    /// Print a block of text
    fn write(&mut self, text: &str);
}

/// Interactive terminal console backed by dialoguer
pub struct TerminalConsole {
    theme: ColorfulTheme,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> TrackerResult<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn read_secret(&mut self, prompt: &str) -> TrackerResult<String> {
        let value = Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?;
        Ok(value)
    }

    fn write(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Console that replays scripted answers and records everything shown.
///
/// Once the script is exhausted every prompt fails with
/// [`TrackerError::InputClosed`].
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console that answers prompts in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Prompts asked so far
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Text blocks written so far
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Whether any written block contains `needle`
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|block| block.contains(needle))
    }

    /// Number of written blocks containing `needle`
    pub fn printed_count(&self, needle: &str) -> usize {
        self.output
            .iter()
            .filter(|block| block.contains(needle))
            .count()
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> TrackerResult<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(TrackerError::InputClosed)
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> TrackerResult<String> {
        self.next_answer(prompt)
    }

    fn read_secret(&mut self, prompt: &str) -> TrackerResult<String> {
        self.next_answer(prompt)
    }

    fn write(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}
