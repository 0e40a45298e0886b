//! Configuration for parsing and reporting
//!
//! The parser never reads the clock itself. The year used for dates written
//! without one is resolved once, here, and threaded through `ParseConfig`.

use crate::error::{ReadartError, Result};
use chrono::{Datelike, Local};
use tracing::debug;

/// Default number of days in the rolling average window
pub const DEFAULT_WINDOW: usize = 14;

/// Configuration for the log parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Year assigned to `day/month` dates that omit it
    pub reference_year: i32,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::with_reference_year(Local::now().year())
    }
}

impl ParseConfig {
    /// Parse configuration with a fixed reference year
    pub fn with_reference_year(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /// Create the configuration from CLI arguments, falling back to the local year
    pub fn from_cli(year: Option<i32>) -> Self {
        match year {
            Some(year) => Self::with_reference_year(year),
            None => {
                let config = Self::default();
                debug!(
                    "No reference year given, using current year {}",
                    config.reference_year
                );
                config
            }
        }
    }
}

/// Configuration for the derived reading-rate charts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Rolling average window in days
    pub window: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

impl ReportConfig {
    /// Create a report configuration, rejecting a zero-day window
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(ReadartError::InvalidArgument(
                "rolling average window must be at least 1 day".to_string(),
            ));
        }
        Ok(Self { window })
    }
}
