//! Output formatting for the run summary
//!
//! After the charts are written, readart prints what it found in each log:
//! - Table format for human-readable terminal output
//! - JSON format for machine-readable output
//!
//! # Examples
//!
//! ```
//! use readart::output::get_formatter;
//! use readart_core::{config::ParseConfig, date_range::DateRange, parser::parse_log_str};
//! use readart_core::summary::{BookSummary, Totals};
//!
//! let book = parse_log_str("1/3 1\n4/3 80\n", "dune.txt", &ParseConfig::with_reference_year(2024)).unwrap();
//! let summaries = vec![BookSummary::from_book(&book)];
//! let totals = Totals::from_summaries(&summaries, &DateRange::of_book(&book).unwrap());
//!
//! let table = get_formatter(false).format_summary(&summaries, &totals);
//! assert!(table.contains("dune.txt"));
//!
//! let json = get_formatter(true).format_summary(&summaries, &totals);
//! assert!(json.contains("\"pages_read\": 79"));
//! ```

use prettytable::{Row, Table, format, row};
use readart_core::summary::{BookSummary, Totals};
use serde_json::json;

/// Trait for summary formatters
pub trait OutputFormatter {
    /// Format the per-book summaries with totals
    fn format_summary(&self, books: &[BookSummary], totals: &Totals) -> String;
}

/// Table formatter for human-readable output
pub struct TableFormatter;

impl TableFormatter {
    /// Format a number with thousands separators
    fn format_number(n: i64) -> String {
        let s = n.unsigned_abs().to_string();
        let mut result = String::new();

        for (count, ch) in s.chars().rev().enumerate() {
            if count > 0 && count % 3 == 0 {
                result.push(',');
            }
            result.push(ch);
        }
        if n < 0 {
            result.push('-');
        }

        result.chars().rev().collect()
    }

    /// Format a reading rate with one decimal
    fn format_rate(rate: f64) -> String {
        format!("{rate:.1}")
    }

    /// Create a totals row for tables
    fn format_totals_row(totals: &Totals) -> Row {
        row![
            b -> format!("TOTAL ({} books)", totals.books),
            "",
            "",
            br -> totals.days,
            br -> Self::format_number(totals.pages_read),
            br -> Self::format_rate(totals.pages_per_day)
        ]
    }
}

impl OutputFormatter for TableFormatter {
    fn format_summary(&self, books: &[BookSummary], totals: &Totals) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row![
            b -> "Book",
            b -> "Started",
            b -> "Finished",
            b -> "Days",
            b -> "Pages",
            b -> "Pages/Day"
        ]);

        for book in books {
            table.add_row(row![
                book.name,
                book.start.format("%Y-%m-%d"),
                book.end.format("%Y-%m-%d"),
                r -> book.days,
                r -> Self::format_number(book.pages_read),
                r -> Self::format_rate(book.pages_per_day)
            ]);
        }

        table.add_row(Self::format_totals_row(totals));
        table.to_string()
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_summary(&self, books: &[BookSummary], totals: &Totals) -> String {
        let output = json!({
            "books": books,
            "totals": totals,
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| output.to_string())
    }
}

/// Get the summary formatter
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter)
    }
}
