//! Core data structures for users and tasks.

mod config;
mod task;
mod user;

pub use config::TrackerConfig;
pub use task::{format_date, parse_date, Completion, Task, TaskBook, DATE_FORMAT};
pub use user::{User, UserDirectory};

/// Separator between fields of a stored record
pub const FIELD_DELIMITER: &str = ", ";

/// Whether a value can be stored as a single record field
pub fn is_storable_field(value: &str) -> bool {
    !value.contains(FIELD_DELIMITER) && !value.contains('\n') && !value.contains('\r')
}

/// Split a record line into its fields, checking the field count
pub(crate) fn split_record(
    record: &str,
    expected: usize,
) -> Result<Vec<&str>, crate::errors::RecordError> {
    let fields: Vec<&str> = record.split(FIELD_DELIMITER).collect();
    if fields.len() == expected {
        Ok(fields)
    } else {
        Err(crate::errors::RecordError::FieldCount {
            expected,
            found: fields.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storable_field() {
        assert!(is_storable_field("Write report"));
        assert!(is_storable_field("a,b"));
        assert!(!is_storable_field("first, second"));
        assert!(!is_storable_field("two\nlines"));
    }

    #[test]
    fn test_split_record_field_count() {
        assert_eq!(split_record("a, b", 2).unwrap(), vec!["a", "b"]);
        assert!(split_record("a, b, c", 2).is_err());
        assert!(split_record("a", 2).is_err());
    }
}
