//! Day-bucketed reading totals across all books
//!
//! Every log entry contributes the pages read since the previous entry of the
//! same book. Those deltas are summed per calendar day into [`DailyPages`],
//! which the rolling-average and running-total charts are derived from.
//!
//! Days are keyed by `NaiveDate` everywhere, so looking up the pages read on a
//! day of the chart range is a map lookup rather than a scan.
//!
//! # Examples
//!
//! ```
//! use readart_core::{
//!     aggregation::Aggregator,
//!     config::{ParseConfig, ReportConfig},
//!     date_range::DateRange,
//!     parser::parse_log_str,
//! };
//!
//! let config = ParseConfig::with_reference_year(2024);
//! let books = vec![
//!     parse_log_str("1/3 1\n2/3 11\n4/3 31\n", "a.txt", &config).unwrap(),
//! ];
//! let range = DateRange::spanning(&books).unwrap();
//! let aggregator = Aggregator::new(ReportConfig::new(2).unwrap());
//!
//! assert_eq!(aggregator.cumulative_series(&books, &range), vec![0, 10, 10, 30]);
//! assert_eq!(aggregator.rolling_average_series(&books, &range), vec![0.0, 5.0, 5.0, 10.0]);
//! ```

use crate::config::ReportConfig;
use crate::date_range::DateRange;
use crate::types::BookLog;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, VecDeque};
use tracing::debug;

/// Pages read per calendar day, summed over all books
///
/// Values can be negative when a log goes backwards (a corrected page number);
/// they are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DailyPages {
    days: BTreeMap<NaiveDate, i64>,
}

impl DailyPages {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add pages to a day
    pub fn add(&mut self, date: NaiveDate, pages: i64) {
        *self.days.entry(date).or_insert(0) += pages;
    }

    /// Pages read on a day, 0 if nothing was logged
    pub fn get(&self, date: NaiveDate) -> i64 {
        self.days.get(&date).copied().unwrap_or(0)
    }

    /// Number of days with at least one entry
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no day has an entry
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Logged days in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, i64)> + '_ {
        self.days.iter().map(|(date, pages)| (*date, *pages))
    }

    /// One value per day of `range`, 0 for days without entries
    pub fn series(&self, range: &DateRange) -> Vec<i64> {
        range.days().map(|day| self.get(day)).collect()
    }
}

/// Pages read per day across `books`
///
/// A book's first entry counts as 0 pages; every later entry counts as its
/// page minus the previous entry's page.
pub fn daily_deltas(books: &[BookLog]) -> DailyPages {
    let mut daily = DailyPages::new();

    for book in books {
        let entries = book.entries();
        daily.add(entries[0].date, 0);
        for pair in entries.windows(2) {
            let read = i64::from(pair[1].page) - i64::from(pair[0].page);
            daily.add(pair[1].date, read);
        }
    }

    debug!(
        "Bucketed {} books into {} reading days",
        books.len(),
        daily.len()
    );
    daily
}

/// Mean of a trailing window of `window` values at each position
///
/// The window fills up from empty, so the first `window - 1` averages use
/// fewer samples. A `window` of 0 is treated as 1.
pub fn rolling_average(values: &[i64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    let mut recent: VecDeque<i64> = VecDeque::with_capacity(window + 1);
    let mut sum = 0i64;

    values
        .iter()
        .map(|&value| {
            recent.push_back(value);
            sum += value;
            if recent.len() > window {
                if let Some(dropped) = recent.pop_front() {
                    sum -= dropped;
                }
            }
            sum as f64 / recent.len() as f64
        })
        .collect()
}

/// Running sum of `values`
pub fn cumulative_total(values: &[i64]) -> Vec<i64> {
    values
        .iter()
        .scan(0i64, |total, &value| {
            *total += value;
            Some(*total)
        })
        .collect()
}

/// Builds the derived reading-rate series for a set of books
pub struct Aggregator {
    config: ReportConfig,
}

impl Aggregator {
    /// Create a new Aggregator
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Get the report configuration
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Rolling average of pages per day over `range`
    pub fn rolling_average_series(&self, books: &[BookLog], range: &DateRange) -> Vec<f64> {
        let daily = daily_deltas(books).series(range);
        rolling_average(&daily, self.config.window)
    }

    /// Total pages read up to and including each day of `range`
    pub fn cumulative_series(&self, books: &[BookLog], range: &DateRange) -> Vec<i64> {
        let daily = daily_deltas(books).series(range);
        cumulative_total(&daily)
    }
}
