//! CLI interface for readart
//!
//! Every flag is optional; with none, readart reads `./input` and writes HTML
//! charts to `./output`.
//!
//! # Example
//!
//! ```bash
//! # Charts for last year's logs, as JSON data instead of HTML
//! readart --input ~/reading/2023 --year 2023 --format json
//!
//! # Weekly rolling average and a machine-readable summary
//! readart --window 7 --json
//! ```

use crate::error::{ReadartError, Result};
use clap::Parser;
use readart_core::config::DEFAULT_WINDOW;
use readart_render::ChartFormat;
use std::path::PathBuf;

/// Chart reading progress from plain-text reading logs
#[derive(Parser, Debug, Clone)]
#[command(name = "readart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding one reading log per book
    #[arg(long, short = 'i', env = "READART_INPUT", default_value = "./input")]
    pub input: PathBuf,

    /// Directory the charts are written to (created if missing)
    #[arg(long, short = 'o', env = "READART_OUTPUT", default_value = "./output")]
    pub output: PathBuf,

    /// Days in the rolling average window
    #[arg(long, short = 'w', default_value_t = DEFAULT_WINDOW, value_parser = parse_window)]
    pub window: usize,

    /// Year for dates written as day/month (defaults to the current year)
    #[arg(long, short = 'y')]
    pub year: Option<i32>,

    /// Chart file format (html or json)
    #[arg(long, short = 'f', default_value = "html")]
    pub format: ChartFormat,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not print the summary
    #[arg(long, conflicts_with = "json")]
    pub no_summary: bool,

    /// Show informational output (default is quiet mode with only warnings and errors)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Parse the rolling average window, which must be at least one day
pub fn parse_window(window_str: &str) -> Result<usize> {
    let window = window_str.parse::<usize>().map_err(|_| {
        ReadartError::InvalidArgument(format!("Invalid window '{window_str}', expected a number of days"))
    })?;
    if window == 0 {
        return Err(ReadartError::InvalidArgument(
            "Window must be at least 1 day".to_string(),
        ));
    }
    Ok(window)
}
