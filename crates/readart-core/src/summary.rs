//! Per-book reading statistics for the run summary

use crate::date_range::DateRange;
use crate::types::BookLog;
use chrono::NaiveDate;
use serde::Serialize;

/// Reading statistics for one book
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookSummary {
    /// Book name
    pub name: String,
    /// First logged day
    pub start: NaiveDate,
    /// Last logged day
    pub end: NaiveDate,
    /// Days from start to end, counting both
    pub days: usize,
    /// Pages between the first and last entry
    pub pages_read: i64,
    /// `pages_read / days`
    pub pages_per_day: f64,
}

impl BookSummary {
    /// Summarize a book
    pub fn from_book(book: &BookLog) -> Self {
        let days = (book.last_date() - book.first_date()).num_days().unsigned_abs() as usize + 1;
        let pages_read = book.pages_read();
        Self {
            name: book.name().to_string(),
            start: book.first_date(),
            end: book.last_date(),
            days,
            pages_read,
            pages_per_day: pages_read as f64 / days as f64,
        }
    }
}

/// Totals over every book of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    /// Number of books
    pub books: usize,
    /// Pages read across all books
    pub pages_read: i64,
    /// Days in the shared range
    pub days: usize,
    /// `pages_read / days`
    pub pages_per_day: f64,
}

impl Totals {
    /// Totals from the book summaries and the shared range
    pub fn from_summaries(summaries: &[BookSummary], range: &DateRange) -> Self {
        let pages_read: i64 = summaries.iter().map(|s| s.pages_read).sum();
        let days = range.len();
        Self {
            books: summaries.len(),
            pages_read,
            days,
            pages_per_day: pages_read as f64 / days as f64,
        }
    }
}
