//! Calendar window shared by every series of a chart

use crate::error::{ReadartError, Result};
use crate::types::BookLog;
use chrono::NaiveDate;
use serde::Serialize;

/// Inclusive range of calendar days
///
/// # Examples
/// ```
/// use readart_core::date_range::DateRange;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let range = DateRange::new(start, end).unwrap();
///
/// assert_eq!(range.len(), 4);
/// let days: Vec<String> = range.days().map(|d| d.format("%d/%m").to_string()).collect();
/// assert_eq!(days, ["27/02", "28/02", "29/02", "01/03"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting one that ends before it starts
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(ReadartError::InvalidArgument(format!(
                "date range ends ({end}) before it starts ({start})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Range from the earliest to the latest entry of all books
    ///
    /// For chronological logs this is the earliest first entry to the latest
    /// last entry. Every entry is considered, so a log with out-of-order lines
    /// widens the range to cover its backdated entries instead of producing
    /// a range that ends before it starts.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` when `books` is empty.
    pub fn spanning(books: &[BookLog]) -> Result<Self> {
        let dates = || books.iter().flat_map(BookLog::entries).map(|entry| entry.date);
        let start = dates().min();
        let end = dates().max();
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            _ => Err(ReadartError::EmptyInput(
                "no books to take a date range from".to_string(),
            )),
        }
    }

    /// Range covering a single book
    pub fn of_book(book: &BookLog) -> Result<Self> {
        Self::spanning(std::slice::from_ref(book))
    }

    /// First day
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days, counting both ends
    pub fn len(&self) -> usize {
        // end >= start is guaranteed by construction
        (self.end - self.start).num_days() as usize + 1
    }

    /// Always false: a range holds at least one day
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Every day from start to end, ascending
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Every calendar day from `start` to `end` inclusive
pub fn all_days(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    Ok(DateRange::new(start, end)?.days().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{book, date};

    #[test]
    fn test_spanning_takes_earliest_start_and_latest_end() {
        let books = vec![
            book("a.txt", &[(date(2024, 3, 1), 1), (date(2024, 3, 20), 100)]),
            book("b.txt", &[(date(2024, 2, 10), 1), (date(2024, 3, 5), 100)]),
            book("c.txt", &[(date(2024, 3, 2), 1), (date(2024, 4, 2), 100)]),
        ];
        let range = DateRange::spanning(&books).unwrap();
        assert_eq!(range.start(), date(2024, 2, 10));
        assert_eq!(range.end(), date(2024, 4, 2));
    }

    #[test]
    fn test_spanning_empty_fails() {
        assert!(matches!(
            DateRange::spanning(&[]),
            Err(ReadartError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(range.len(), 1);
        assert_eq!(range.days().collect::<Vec<_>>(), vec![date(2024, 1, 1)]);
    }

    #[test]
    fn test_all_days_across_year_end() {
        let days = all_days(date(2023, 12, 30), date(2024, 1, 2)).unwrap();
        assert_eq!(
            days,
            vec![
                date(2023, 12, 30),
                date(2023, 12, 31),
                date(2024, 1, 1),
                date(2024, 1, 2)
            ]
        );
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert!(DateRange::new(date(2024, 1, 2), date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_of_book() {
        let log = book("a.txt", &[(date(2024, 5, 1), 1), (date(2024, 5, 3), 9)]);
        let range = DateRange::of_book(&log).unwrap();
        assert_eq!(range.len(), 3);
    }

    #[test]
    fn test_of_book_with_out_of_order_entries() {
        let log = book("a.txt", &[(date(2024, 5, 4), 1), (date(2024, 5, 2), 9)]);
        let range = DateRange::of_book(&log).unwrap();
        assert_eq!(range.start(), date(2024, 5, 2));
        assert_eq!(range.end(), date(2024, 5, 4));
    }
}
