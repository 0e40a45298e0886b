//! Reading log parser
//!
//! A reading log is a plain-text file with one observation per line:
//!
//! ```text
//! 3/1 0          day/month, year taken from the reference year, page 0 means "started"
//! 4/1 35
//! 9/1/2024 120   explicit year
//! 180            final page as written, dated one day after the previous line
//! ```
//!
//! Lines are processed strictly in order and never sorted. When the first
//! dated line is past page 1, an extra entry at page 1 is put one day before
//! it so charts start from the bottom of the axis.
//!
//! # Examples
//!
//! ```
//! use readart_core::config::ParseConfig;
//! use readart_core::parser::parse_log_str;
//!
//! let config = ParseConfig::with_reference_year(2024);
//! let book = parse_log_str("1/1 5\n2/1 3\n", "dune.txt", &config).unwrap();
//!
//! let pages: Vec<u32> = book.entries().iter().map(|e| e.page).collect();
//! assert_eq!(pages, vec![1, 5, 3]);
//! assert_eq!(book.first_date().to_string(), "2023-12-31");
//! ```

use crate::config::ParseConfig;
use crate::error::{ReadartError, Result};
use crate::types::{BookLog, LogEntry};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Where a token came from, for error reporting
struct LineContext<'a> {
    book: &'a str,
    line: usize,
    content: &'a str,
}

impl LineContext<'_> {
    fn malformed_date(&self, reason: impl Into<String>) -> ReadartError {
        ReadartError::MalformedDate {
            book: self.book.to_string(),
            line: self.line,
            content: self.content.to_string(),
            reason: reason.into(),
        }
    }

    fn malformed_page(&self, reason: impl Into<String>) -> ReadartError {
        ReadartError::MalformedPage {
            book: self.book.to_string(),
            line: self.line,
            content: self.content.to_string(),
            reason: reason.into(),
        }
    }

    fn orphan_terminal_line(&self) -> ReadartError {
        ReadartError::OrphanTerminalLine {
            book: self.book.to_string(),
            line: self.line,
            content: self.content.to_string(),
        }
    }

    /// Parse `day/month[/year]`
    fn parse_date(&self, token: &str, reference_year: i32) -> Result<NaiveDate> {
        let parts: Vec<&str> = token.split('/').collect();
        let (day, month, year) = match parts.as_slice() {
            [day, month] => (*day, *month, None),
            [day, month, year] => (*day, *month, Some(*year)),
            [_] => return Err(self.malformed_date(format!("'{token}' is missing a month"))),
            _ => {
                return Err(self.malformed_date(format!(
                    "'{token}' has more than day, month and year"
                )));
            }
        };

        let day: u32 = day
            .parse()
            .map_err(|_| self.malformed_date(format!("day '{day}' is not a number")))?;
        let month: u32 = month
            .parse()
            .map_err(|_| self.malformed_date(format!("month '{month}' is not a number")))?;
        let year: i32 = match year {
            Some(year) => year
                .parse()
                .map_err(|_| self.malformed_date(format!("year '{year}' is not a number")))?,
            None => reference_year,
        };

        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| self.malformed_date(format!("{day}/{month}/{year} is not a calendar day")))
    }

    /// Parse a page number as written
    fn parse_page(&self, token: &str) -> Result<u32> {
        token
            .parse()
            .map_err(|_| self.malformed_page(format!("'{token}' is not a page number")))
    }
}

/// Parse a reading log from its lines
///
/// # Errors
///
/// Fails on the first malformed line with `MalformedDate`, `MalformedPage` or
/// `OrphanTerminalLine`, and with `EmptyInput` when there are no log lines.
pub fn parse_log<I, S>(lines: I, name: &str, config: &ParseConfig) -> Result<BookLog>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries: Vec<LogEntry> = Vec::new();
    let mut lines = lines.into_iter().enumerate();

    while let Some((index, raw)) = lines.next() {
        let content = raw.as_ref();
        let ctx = LineContext {
            book: name,
            line: index + 1,
            content,
        };
        let tokens: Vec<&str> = content.split_whitespace().collect();

        match tokens.as_slice() {
            [] => continue,

            // Final page without a date: one day after the previous entry
            [page] => {
                let page = ctx.parse_page(page)?;
                let Some(previous) = entries.last() else {
                    return Err(ctx.orphan_terminal_line());
                };
                let date = previous
                    .date
                    .succ_opt()
                    .ok_or_else(|| ctx.malformed_date("no day after the previous entry"))?;
                entries.push(LogEntry::new(date, page));

                let ignored = lines
                    .by_ref()
                    .filter(|(_, line)| !line.as_ref().trim().is_empty())
                    .count();
                if ignored > 0 {
                    warn!(
                        "{}: ignoring {} line(s) after the final page on line {}",
                        name, ignored, ctx.line
                    );
                }
                break;
            }

            [date, page, rest @ ..] => {
                if !rest.is_empty() {
                    warn!(
                        "{}: ignoring extra tokens {:?} on line {}",
                        name, rest, ctx.line
                    );
                }
                let date = ctx.parse_date(date, config.reference_year)?;
                // Page 0 on a dated line means "started"
                let page = ctx.parse_page(page)?.max(1);

                match entries.last() {
                    Some(previous) if date < previous.date => {
                        warn!(
                            "{}: line {} is dated {} which is before the previous entry {}",
                            name, ctx.line, date, previous.date
                        );
                    }
                    None if page > 1 => {
                        let start = date
                            .pred_opt()
                            .ok_or_else(|| ctx.malformed_date("no day before the first entry"))?;
                        debug!("{}: starting at page {}, adding page 1 on {}", name, page, start);
                        entries.push(LogEntry::new(start, 1));
                    }
                    _ => {}
                }

                entries.push(LogEntry::new(date, page));
            }
        }
    }

    if entries.is_empty() {
        return Err(ReadartError::EmptyInput(format!("{name} has no log lines")));
    }

    debug!("Parsed {} entries for {}", entries.len(), name);
    BookLog::new(name, entries)
}

/// Parse a reading log held in a string
pub fn parse_log_str(content: &str, name: &str, config: &ParseConfig) -> Result<BookLog> {
    parse_log(content.lines(), name, config)
}
