//! Shared test utilities for unit tests
//!
//! Integration tests in tests/ cannot see this module because it's marked
//! with #[cfg(test)]; they use tests/common/mod.rs instead.

use crate::types::{BookLog, LogEntry};
use chrono::NaiveDate;

/// Build a calendar date, panicking on an impossible one
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Build a BookLog straight from `(date, page)` pairs, bypassing the parser
pub fn book(name: &str, entries: &[(NaiveDate, u32)]) -> BookLog {
    BookLog::new(
        name,
        entries
            .iter()
            .map(|&(date, page)| LogEntry::new(date, page))
            .collect(),
    )
    .unwrap()
}
