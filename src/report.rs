//! Builds the charts for a set of books
//!
//! A run produces four kinds of chart:
//!
//! - `allBooks`: every book's progress on one shared calendar;
//! - one progress chart per book, over that book's own days;
//! - the rolling average of pages read per day;
//! - the running total of pages read.
//!
//! # Examples
//!
//! ```
//! use readart::report::ReportBuilder;
//! use readart_core::{config::{ParseConfig, ReportConfig}, parser::parse_log_str};
//!
//! let config = ParseConfig::with_reference_year(2024);
//! let books = vec![
//!     parse_log_str("1/3 1\n4/3 80\n", "dune.txt", &config).unwrap(),
//!     parse_log_str("2/3 1\n3/3 40\n", "emma.txt", &config).unwrap(),
//! ];
//!
//! let charts = ReportBuilder::new(ReportConfig::default()).build_all(&books).unwrap();
//! let stems: Vec<&str> = charts.iter().map(|c| c.file_stem()).collect();
//! assert_eq!(
//!     stems,
//!     ["allBooks", "dune.txt", "emma.txt", "Running 14 day average", "Total pages read"]
//! );
//! ```

use chrono::Datelike;
use readart_core::aggregation::Aggregator;
use readart_core::chart::{Chart, ChartLayout, Series};
use readart_core::config::ReportConfig;
use readart_core::date_range::DateRange;
use readart_core::error::Result;
use readart_core::series::expand;
use readart_core::types::BookLog;
use tracing::debug;

/// File stem of the combined chart
pub const ALL_BOOKS_CHART: &str = "allBooks";
/// Title, file stem and series name of the running total chart
pub const TOTAL_PAGES_CHART: &str = "Total pages read";

const PROGRESS_AXIS: &str = "Page Number";
const AVERAGE_AXIS: &str = "Page Count";
const TOTAL_AXIS: &str = "Page Total";

/// How days are labelled on the x-axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisLabels {
    /// `day/month`, for charts short enough to tell days apart
    DayMonth,
    /// Full month name, for charts spanning months
    Month,
}

impl AxisLabels {
    /// One label per day of `range`
    pub fn labels(&self, range: &DateRange) -> Vec<String> {
        let format = match self {
            AxisLabels::DayMonth => "%-d/%-m",
            AxisLabels::Month => "%B",
        };
        range
            .days()
            .map(|day| day.format(format).to_string())
            .collect()
    }
}

/// Assembles [`Chart`]s from parsed books
pub struct ReportBuilder {
    aggregator: Aggregator,
}

impl ReportBuilder {
    /// Create a new ReportBuilder
    pub fn new(config: ReportConfig) -> Self {
        Self {
            aggregator: Aggregator::new(config),
        }
    }

    fn window(&self) -> usize {
        self.aggregator.config().window
    }

    /// Every chart of a run: combined, one per book, rolling average, running total
    pub fn build_all(&self, books: &[BookLog]) -> Result<Vec<Chart>> {
        let mut charts = Vec::with_capacity(books.len() + 3);
        charts.push(self.combined_chart(books)?);
        for book in books {
            charts.push(self.book_chart(book)?);
        }
        charts.push(self.rolling_average_chart(books)?);
        charts.push(self.cumulative_chart(books)?);

        debug!("Built {} charts for {} books", charts.len(), books.len());
        Ok(charts)
    }

    /// Progress of every book on a shared calendar
    pub fn combined_chart(&self, books: &[BookLog]) -> Result<Chart> {
        let range = DateRange::spanning(books)?;
        let series = books
            .iter()
            .map(|book| Series {
                name: book.name().to_string(),
                cells: expand(book, &range),
            })
            .collect();

        Chart::new(
            ALL_BOOKS_CHART,
            combined_title(&range),
            PROGRESS_AXIS,
            ChartLayout::Wide,
            AxisLabels::Month.labels(&range),
            series,
        )
    }

    /// Progress of one book over its own days
    pub fn book_chart(&self, book: &BookLog) -> Result<Chart> {
        let range = DateRange::of_book(book)?;
        Chart::new(
            book.name(),
            book.name(),
            PROGRESS_AXIS,
            ChartLayout::Narrow,
            AxisLabels::DayMonth.labels(&range),
            vec![Series {
                name: book.name().to_string(),
                cells: expand(book, &range),
            }],
        )
    }

    /// Rolling average of pages read per day
    pub fn rolling_average_chart(&self, books: &[BookLog]) -> Result<Chart> {
        let range = DateRange::spanning(books)?;
        let window = self.window();
        let averages = self.aggregator.rolling_average_series(books, &range);
        let title = format!("Running {window} day average");

        Chart::new(
            title.clone(),
            title,
            AVERAGE_AXIS,
            ChartLayout::Narrow,
            AxisLabels::Month.labels(&range),
            vec![Series::new(format!("Avg pages per {window} days"), averages)],
        )
    }

    /// Total pages read up to each day
    pub fn cumulative_chart(&self, books: &[BookLog]) -> Result<Chart> {
        let range = DateRange::spanning(books)?;
        let totals = self.aggregator.cumulative_series(books, &range);

        Chart::new(
            TOTAL_PAGES_CHART,
            TOTAL_PAGES_CHART,
            TOTAL_AXIS,
            ChartLayout::Narrow,
            AxisLabels::Month.labels(&range),
            vec![Series::new(TOTAL_PAGES_CHART, totals)],
        )
    }
}

fn combined_title(range: &DateRange) -> String {
    let (first, last) = (range.start().year(), range.end().year());
    if first == last {
        format!("Books read {first}")
    } else {
        format!("Books read {first}-{last}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use readart_core::series::Cell;
    use readart_core::types::LogEntry;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn book(name: &str, entries: &[(NaiveDate, u32)]) -> BookLog {
        BookLog::new(
            name,
            entries.iter().map(|&(d, p)| LogEntry::new(d, p)).collect(),
        )
        .unwrap()
    }

    fn books() -> Vec<BookLog> {
        vec![
            book("dune.txt", &[(date(2024, 1, 30), 1), (date(2024, 2, 1), 101)]),
            book("emma.txt", &[(date(2024, 2, 1), 1), (date(2024, 2, 2), 21)]),
        ]
    }

    #[test]
    fn test_axis_labels() {
        let range = DateRange::new(date(2024, 1, 31), date(2024, 2, 1)).unwrap();
        assert_eq!(AxisLabels::DayMonth.labels(&range), vec!["31/1", "1/2"]);
        assert_eq!(AxisLabels::Month.labels(&range), vec!["January", "February"]);
    }

    #[test]
    fn test_combined_chart() {
        let chart = ReportBuilder::new(ReportConfig::default())
            .combined_chart(&books())
            .unwrap();

        assert_eq!(chart.file_stem(), "allBooks");
        assert_eq!(chart.title(), "Books read 2024");
        assert_eq!(chart.layout(), ChartLayout::Wide);
        assert_eq!(chart.labels().len(), 4);
        assert_eq!(
            chart.series()[0].cells,
            vec![Cell::Value(1.0), Cell::Value(1.0), Cell::Value(101.0), Cell::Blank]
        );
        assert_eq!(
            chart.series()[1].cells,
            vec![Cell::Blank, Cell::Blank, Cell::Value(1.0), Cell::Value(21.0)]
        );
    }

    #[test]
    fn test_combined_title_across_years() {
        let range = DateRange::new(date(2023, 12, 1), date(2024, 1, 5)).unwrap();
        assert_eq!(combined_title(&range), "Books read 2023-2024");
    }

    #[test]
    fn test_book_chart_uses_own_range() {
        let books = books();
        let chart = ReportBuilder::new(ReportConfig::default())
            .book_chart(&books[1])
            .unwrap();
        assert_eq!(chart.title(), "emma.txt");
        assert_eq!(chart.labels(), ["1/2", "2/2"]);
        assert_eq!(chart.layout(), ChartLayout::Narrow);
    }

    #[test]
    fn test_rate_charts() {
        let builder = ReportBuilder::new(ReportConfig::new(2).unwrap());
        let books = books();

        let average = builder.rolling_average_chart(&books).unwrap();
        assert_eq!(average.file_stem(), "Running 2 day average");
        assert_eq!(average.series()[0].name, "Avg pages per 2 days");
        assert_eq!(average.y_axis(), "Page Count");
        // deltas: 0, 0, 100 + 0, 20
        assert_eq!(
            average.series()[0].cells,
            vec![Cell::Value(0.0), Cell::Value(0.0), Cell::Value(50.0), Cell::Value(60.0)]
        );

        let total = builder.cumulative_chart(&books).unwrap();
        assert_eq!(total.y_axis(), "Page Total");
        assert_eq!(
            total.series()[0].cells,
            vec![Cell::Value(0.0), Cell::Value(0.0), Cell::Value(100.0), Cell::Value(120.0)]
        );
    }

    #[test]
    fn test_build_all_rejects_no_books() {
        assert!(ReportBuilder::new(ReportConfig::default()).build_all(&[]).is_err());
    }
}
