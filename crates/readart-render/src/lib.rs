//! Chart rendering for readart
//!
//! The core crate describes charts as labels plus aligned series; this crate
//! turns them into files. [`ChartRenderer`] is the seam: [`EchartsRenderer`]
//! writes self-contained HTML pages, [`JsonRenderer`] writes the raw data.
//!
//! # Examples
//!
//! ```no_run
//! use readart_core::chart::{Chart, ChartLayout, Series};
//! use readart_render::{ChartFormat, ChartWriter, get_renderer};
//!
//! # fn example() -> readart_core::Result<()> {
//! let chart = Chart::new(
//!     "Total pages read",
//!     "Total pages read",
//!     "Page Total",
//!     ChartLayout::Narrow,
//!     vec!["January".into(), "January".into()],
//!     vec![Series::new("Total pages read", [0i64, 25])],
//! )?;
//!
//! let writer = ChartWriter::new("./output", get_renderer(ChartFormat::Html));
//! writer.write(&chart)?;
//! # Ok(())
//! # }
//! ```

pub mod echarts;
pub mod json;
pub mod renderer;
pub mod writer;

pub use echarts::EchartsRenderer;
pub use json::JsonRenderer;
pub use renderer::{ChartFormat, ChartRenderer, get_renderer};
pub use writer::ChartWriter;
