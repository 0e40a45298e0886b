//! Renderer trait and format selection

use crate::echarts::EchartsRenderer;
use crate::json::JsonRenderer;
use readart_core::Result;
use readart_core::chart::Chart;
use std::fmt;

/// Turns a [`Chart`] into the contents of an output file
///
/// # Example Implementation
///
/// ```
/// use readart_core::{Result, chart::Chart};
/// use readart_render::ChartRenderer;
///
/// struct CsvRenderer;
///
/// impl ChartRenderer for CsvRenderer {
///     fn extension(&self) -> &'static str {
///         "csv"
///     }
///
///     fn render(&self, chart: &Chart) -> Result<String> {
///         Ok(chart.labels().join(","))
///     }
/// }
/// ```
pub trait ChartRenderer {
    /// File extension of the rendered artifact, without the dot
    fn extension(&self) -> &'static str;

    /// Render the chart
    fn render(&self, chart: &Chart) -> Result<String>;
}

/// Output format for chart artifacts
///
/// # Examples
/// ```
/// use readart_render::ChartFormat;
/// use std::str::FromStr;
///
/// assert_eq!(ChartFormat::from_str("HTML").unwrap(), ChartFormat::Html);
/// assert_eq!(ChartFormat::Json.to_string(), "json");
/// assert!(ChartFormat::from_str("png").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartFormat {
    /// Standalone HTML page drawing the chart with ECharts
    #[default]
    Html,
    /// The chart data as JSON
    Json,
}

impl fmt::Display for ChartFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ChartFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid chart format: {s}. Use 'html' or 'json'")),
        }
    }
}

/// Get the renderer for a format
pub fn get_renderer(format: ChartFormat) -> Box<dyn ChartRenderer> {
    match format {
        ChartFormat::Html => Box::new(EchartsRenderer::new()),
        ChartFormat::Json => Box::new(JsonRenderer),
    }
}
