//! Common test utilities and helpers for readart tests
//!
//! Builders for reading-log text and a temporary input directory, so tests
//! can exercise the loader the way the binary does.

use chrono::NaiveDate;
use readart_core::config::ParseConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Reference year used by every integration test
pub const TEST_YEAR: i32 = 2024;

/// Parse configuration pinned to [`TEST_YEAR`]
pub fn test_config() -> ParseConfig {
    ParseConfig::with_reference_year(TEST_YEAR)
}

/// Build a calendar date
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builder for the text of one reading log
pub struct LogBuilder {
    lines: Vec<String>,
}

impl LogBuilder {
    /// Start an empty log
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a `day/month page` line
    pub fn day(mut self, day: u32, month: u32, page: u32) -> Self {
        self.lines.push(format!("{day}/{month} {page}"));
        self
    }

    /// Add a `day/month/year page` line
    #[allow(dead_code)]
    pub fn dated(mut self, date: NaiveDate, page: u32) -> Self {
        self.lines
            .push(format!("{}/{}/{} {}", date.format("%-d"), date.format("%-m"), date.format("%Y"), page));
        self
    }

    /// Add a raw line
    #[allow(dead_code)]
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Finish the log with a date-less final page
    pub fn finished_at(mut self, page: u32) -> Self {
        self.lines.push(page.to_string());
        self
    }

    /// The log text
    pub fn build(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

impl Default for LogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Temporary input and output directories for one run
pub struct TestLibrary {
    dir: TempDir,
}

impl TestLibrary {
    /// Create empty input and output directories
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("input")).unwrap();
        Self { dir }
    }

    /// Add a book's log to the input directory
    pub fn add_book(&self, name: &str, log: &str) -> &Self {
        fs::write(self.input_dir().join(name), log).unwrap();
        self
    }

    /// Directory holding the logs
    pub fn input_dir(&self) -> PathBuf {
        self.dir.path().join("input")
    }

    /// Directory charts are written to (not created up front)
    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("output")
    }

    /// Root of the temporary directory
    #[allow(dead_code)]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// A small library of three books spread over February 2024
#[allow(dead_code)]
pub fn sample_library() -> TestLibrary {
    let library = TestLibrary::new();
    library
        .add_book(
            "Dune.txt",
            &LogBuilder::new()
                .day(1, 2, 0)
                .day(2, 2, 40)
                .day(5, 2, 120)
                .finished_at(180)
                .build(),
        )
        .add_book(
            "Emma.txt",
            &LogBuilder::new()
                .day(4, 2, 30)
                .day(6, 2, 90)
                .day(10, 2, 200)
                .build(),
        )
        .add_book(
            "Kindred.txt",
            &LogBuilder::new().day(8, 2, 1).day(9, 2, 25).build(),
        );
    library
}
