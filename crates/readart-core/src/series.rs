//! Dense per-day series built from sparse reading logs
//!
//! Charts put every book on the same calendar axis, so each book needs one
//! value per day of the shared range. Days before the book starts and after it
//! ends are left blank; days between two log lines repeat the last known page.

use crate::date_range::DateRange;
use crate::types::BookLog;
use serde::{Serialize, Serializer};

/// One point of a chart series
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// A plotted value
    Value(f64),
    /// No value; the line is not drawn for this day
    Blank,
}

impl Cell {
    /// The plotted value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            Cell::Value(value) => Some(*value),
            Cell::Blank => None,
        }
    }

    /// Whether the cell is blank
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Value(f64::from(value))
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Value(value as f64)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Value(value)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Value(value) => serializer.serialize_f64(*value),
            Cell::Blank => serializer.serialize_none(),
        }
    }
}

/// Expand a book's entries into one cell per day of `range`
///
/// Walks the days and the entries together with a single cursor:
///
/// - a day with an entry gets that entry's page;
/// - a day before the first entry or after the last one is blank;
/// - any other day repeats the last page seen.
///
/// Entries dated before the day under the cursor are consumed without being
/// emitted until an entry matches the day; after that only entries of the
/// same day are taken, so several entries on one day resolve to the last of
/// them and an out-of-order entry never hides the page logged for a day.
///
/// # Examples
/// ```
/// use readart_core::{date_range::DateRange, series::{expand, Cell}, types::{BookLog, LogEntry}};
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let book = BookLog::new("a.txt", vec![LogEntry::new(day(1), 10), LogEntry::new(day(3), 20)]).unwrap();
/// let range = DateRange::new(day(1), day(4)).unwrap();
///
/// assert_eq!(
///     expand(&book, &range),
///     vec![Cell::Value(10.0), Cell::Value(10.0), Cell::Value(20.0), Cell::Blank]
/// );
/// ```
pub fn expand(book: &BookLog, range: &DateRange) -> Vec<Cell> {
    let entries = book.entries();
    let mut cursor = 0;
    let mut last_page: Option<u32> = None;
    let mut cells = Vec::with_capacity(range.len());

    for day in range.days() {
        let mut matched = false;
        while let Some(entry) = entries.get(cursor) {
            // Once the day has matched, only further same-day entries are taken
            if entry.date == day {
                matched = true;
            } else if entry.date > day || matched {
                break;
            }
            last_page = Some(entry.page);
            cursor += 1;
        }

        let cell = match last_page {
            Some(page) if matched => Cell::from(page),
            Some(_) if cursor >= entries.len() => Cell::Blank,
            Some(page) => Cell::from(page),
            None => Cell::Blank,
        };
        cells.push(cell);
    }

    cells
}
