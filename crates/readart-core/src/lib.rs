//! Core types and algorithms for readart
//!
//! This crate parses reading logs into [`BookLog`]s and turns them into
//! chart-ready, day-aligned series. It does no file or terminal IO; the
//! `readart` binary and `readart-render` handle that.

pub mod aggregation;
pub mod chart;
pub mod config;
pub mod date_range;
pub mod error;
pub mod parser;
pub mod series;
pub mod summary;
pub mod types;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{ReadartError, Result};
pub use types::{BookLog, LogEntry};
