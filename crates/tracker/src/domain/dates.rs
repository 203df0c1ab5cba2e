//! Due date entry and validation.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::console::Console;
use crate::errors::TrackerResult;
use crate::ui;

/// `d m yyyy` with one or two digit day and month
static DUE_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<day>[0-9]{1,2}) (?P<month>[0-9]{1,2}) (?P<year>[0-9]{4})$").unwrap()
});

pub const DUE_DATE_PROMPT: &str = r#"Please enter the due date of the task "dd mm yyyy""#;

/// Why an entered due date was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRejection {
    #[error("Not a valid date input, please ensure spaces are included")]
    Format,

    #[error("{reason}")]
    NotACalendarDate { reason: String },

    #[error("Please set the due date in the future")]
    BeforeReference,
}

/// Validate a `dd mm yyyy` entry against a not-before date.
///
/// Dates equal to `reference` are accepted.
pub fn parse_due_date(input: &str, reference: NaiveDate) -> Result<NaiveDate, DateRejection> {
    let caps = DUE_DATE_PATTERN
        .captures(input.trim())
        .ok_or(DateRejection::Format)?;

    // The pattern bounds each group to at most four digits
    let day: u32 = caps["day"].parse().map_err(|_| DateRejection::Format)?;
    let month: u32 = caps["month"].parse().map_err(|_| DateRejection::Format)?;
    let year: i32 = caps["year"].parse().map_err(|_| DateRejection::Format)?;

    let date = calendar_date(year, month, day)?;
    if date < reference {
        return Err(DateRejection::BeforeReference);
    }
    Ok(date)
}

fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, DateRejection> {
    if year < 1 {
        return Err(DateRejection::NotACalendarDate {
            reason: format!("year {year} is out of range"),
        });
    }
    if !(1..=12).contains(&month) {
        return Err(DateRejection::NotACalendarDate {
            reason: "month must be in 1..12".to_string(),
        });
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateRejection::NotACalendarDate {
        reason: "day is out of range for month".to_string(),
    })
}

/// Prompt until a valid due date on or after `reference` is entered
pub fn prompt_due_date(console: &mut dyn Console, reference: NaiveDate) -> TrackerResult<NaiveDate> {
    loop {
        let input = console.read_line(DUE_DATE_PROMPT)?;
        match parse_due_date(&input, reference) {
            Ok(date) => return Ok(date),
            Err(rejection) => {
                tracing::debug!(input = %input, %rejection, "Rejected due date");
                console.write(&ui::error_banner(&rejection.to_string()));
            }
        }
    }
}
