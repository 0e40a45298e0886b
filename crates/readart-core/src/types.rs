//! Core domain types for readart
//!
//! A reading log is a list of `(date, page)` observations for one book. These
//! types keep the observations at calendar-day precision; there is no
//! time-of-day anywhere in the model.

use crate::error::{ReadartError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One observation in a reading log: the cumulative page reached on a day
///
/// # Examples
/// ```
/// use readart_core::types::LogEntry;
/// use chrono::NaiveDate;
///
/// let entry = LogEntry::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 42);
/// assert_eq!(entry.page, 42);
/// assert_eq!(entry.to_string(), "2024-03-01 p42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LogEntry {
    /// Day of the observation
    pub date: NaiveDate,
    /// Cumulative page reached that day
    pub page: u32,
}

impl LogEntry {
    /// Create a new LogEntry
    pub fn new(date: NaiveDate, page: u32) -> Self {
        Self { date, page }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} p{}", self.date.format("%Y-%m-%d"), self.page)
    }
}

/// Parsed reading progress for one book
///
/// A `BookLog` always holds at least one entry and is not mutated once built.
/// Entries are kept in input order, which is expected to be chronological.
///
/// # Examples
/// ```
/// use readart_core::types::{BookLog, LogEntry};
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let book = BookLog::new("dune.txt", vec![
///     LogEntry::new(day(1), 1),
///     LogEntry::new(day(5), 120),
/// ]).unwrap();
///
/// assert_eq!(book.first_date(), day(1));
/// assert_eq!(book.last_date(), day(5));
/// assert_eq!(book.pages_read(), 119);
///
/// assert!(BookLog::new("empty.txt", vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookLog {
    name: String,
    entries: Vec<LogEntry>,
}

impl BookLog {
    /// Create a BookLog, rejecting an empty entry list
    pub fn new(name: impl Into<String>, entries: Vec<LogEntry>) -> Result<Self> {
        let name = name.into();
        if entries.is_empty() {
            return Err(ReadartError::EmptyInput(format!(
                "{name} has no log entries"
            )));
        }
        Ok(Self { name, entries })
    }

    /// Display name, taken from the source file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All entries in log order
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// First entry (possibly the synthesized bootstrap entry)
    pub fn first_entry(&self) -> &LogEntry {
        &self.entries[0]
    }

    /// Last entry
    pub fn last_entry(&self) -> &LogEntry {
        &self.entries[self.entries.len() - 1]
    }

    /// Date of the first entry
    pub fn first_date(&self) -> NaiveDate {
        self.first_entry().date
    }

    /// Date of the last entry
    pub fn last_date(&self) -> NaiveDate {
        self.last_entry().date
    }

    /// Pages between the first and the last entry (negative if the log goes backwards)
    pub fn pages_read(&self) -> i64 {
        i64::from(self.last_entry().page) - i64::from(self.first_entry().page)
    }
}
