//! readart - Chart reading progress from plain-text reading logs
//!
//! This library provides functionality to:
//! - Discover and parse one reading log per book from an input directory
//! - Build progress, rolling-average and running-total charts
//! - Print a per-book summary as a table or JSON
//!
//! Parsing and aggregation live in `readart-core`, chart rendering in
//! `readart-render`.
//!
//! # Examples
//!
//! ```no_run
//! use readart::{
//!     data_loader::LogLoader,
//!     report::ReportBuilder,
//! };
//! use readart_core::config::{ParseConfig, ReportConfig};
//! use readart_render::{ChartFormat, ChartWriter, get_renderer};
//!
//! fn main() -> readart::Result<()> {
//!     let books = LogLoader::new("./input", ParseConfig::from_cli(None)).load_books()?;
//!     let charts = ReportBuilder::new(ReportConfig::default()).build_all(&books)?;
//!
//!     let writer = ChartWriter::new("./output", get_renderer(ChartFormat::Html));
//!     writer.write_all(&charts)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod data_loader;
pub mod output;
pub mod report;

pub use readart_core::error;

// Re-export commonly used types
pub use error::{ReadartError, Result};
pub use readart_core::types::{BookLog, LogEntry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
