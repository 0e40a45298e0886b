//! Error types for readart
//!
//! This module defines the error types used throughout the readart crates.
//! All errors are derived from `thiserror` for convenient error handling
//! and automatic `From` implementations.
//!
//! # Example
//!
//! ```
//! use readart_core::error::{ReadartError, Result};
//!
//! fn example_function() -> Result<()> {
//!     // This will automatically convert io::Error to ReadartError
//!     let _file = std::fs::read_to_string("nonexistent.txt")?;
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for readart operations
///
/// Parse failures carry the book name, the 1-based line number and the
/// offending line so the user can fix the log by hand.
#[derive(Error, Debug)]
pub enum ReadartError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A log file or directory could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// The file or directory being read
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Date token is missing a component, is not numeric or is not a calendar day
    #[error("Malformed date in {book} line {line} ({content:?}): {reason}")]
    MalformedDate {
        /// Book the line belongs to
        book: String,
        /// 1-based line number
        line: usize,
        /// The raw line
        content: String,
        /// What was wrong with the date token
        reason: String,
    },

    /// Page token is not a non-negative integer
    #[error("Malformed page in {book} line {line} ({content:?}): {reason}")]
    MalformedPage {
        /// Book the line belongs to
        book: String,
        /// 1-based line number
        line: usize,
        /// The raw line
        content: String,
        /// What was wrong with the page token
        reason: String,
    },

    /// Date-less final page line with nothing before it to date it from
    #[error("Terminal page line without a preceding dated entry in {book} line {line} ({content:?})")]
    OrphanTerminalLine {
        /// Book the line belongs to
        book: String,
        /// 1-based line number
        line: usize,
        /// The raw line
        content: String,
    },

    /// No books, or a book without any log lines
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A chart series does not line up with the x-axis labels
    #[error("Series '{series}' has {actual} values but the chart has {expected} labels")]
    SeriesLength {
        /// Series name
        series: String,
        /// Number of x-axis labels
        expected: usize,
        /// Number of values in the series
        actual: usize,
    },

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Several log files failed to parse
    #[error("{} log file(s) failed to parse:\n{}", .0.len(), format_batch(.0))]
    Batch(Vec<ReadartError>),
}

fn format_batch(errors: &[ReadartError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convenience type alias for Results in readart
///
/// # Example
///
/// ```
/// use readart_core::Result;
///
/// fn process_data() -> Result<String> {
///     Ok("Processed successfully".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ReadartError>;
