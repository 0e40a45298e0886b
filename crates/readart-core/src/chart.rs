//! Renderer-facing chart description
//!
//! A [`Chart`] is everything a renderer needs: x-axis labels and one or more
//! named series aligned to them. How it is drawn is up to the renderer.

use crate::error::{ReadartError, Result};
use crate::series::Cell;
use serde::Serialize;

/// How much room a chart gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartLayout {
    /// Wide chart with a legend, for several books at once
    Wide,
    /// Narrow chart without a legend, for a single series
    Narrow,
}

impl ChartLayout {
    /// Whether the legend is shown
    pub fn shows_legend(&self) -> bool {
        matches!(self, ChartLayout::Wide)
    }
}

/// A named line on a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Legend name
    pub name: String,
    /// One cell per x-axis label
    pub cells: Vec<Cell>,
}

impl Series {
    /// Create a series from anything convertible to cells
    pub fn new<T: Into<Cell>>(name: impl Into<String>, values: impl IntoIterator<Item = T>) -> Self {
        Self {
            name: name.into(),
            cells: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// A line chart ready to be rendered
///
/// # Examples
/// ```
/// use readart_core::chart::{Chart, ChartLayout, Series};
///
/// let chart = Chart::new(
///     "Total pages read",
///     "Total pages read",
///     "Page Total",
///     ChartLayout::Narrow,
///     vec!["January".into(), "January".into()],
///     vec![Series::new("Total pages read", [0i64, 12])],
/// )
/// .unwrap();
/// assert_eq!(chart.series()[0].cells.len(), chart.labels().len());
///
/// let mismatched = Chart::new(
///     "x", "x", "y", ChartLayout::Narrow,
///     vec!["January".into()],
///     vec![Series::new("s", [1u32, 2])],
/// );
/// assert!(mismatched.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    file_stem: String,
    title: String,
    y_axis: String,
    layout: ChartLayout,
    labels: Vec<String>,
    series: Vec<Series>,
}

impl Chart {
    /// Create a chart, checking every series has one cell per label
    pub fn new(
        file_stem: impl Into<String>,
        title: impl Into<String>,
        y_axis: impl Into<String>,
        layout: ChartLayout,
        labels: Vec<String>,
        series: Vec<Series>,
    ) -> Result<Self> {
        if let Some(bad) = series.iter().find(|s| s.cells.len() != labels.len()) {
            return Err(ReadartError::SeriesLength {
                series: bad.name.clone(),
                expected: labels.len(),
                actual: bad.cells.len(),
            });
        }

        Ok(Self {
            file_stem: file_stem.into(),
            title: title.into(),
            y_axis: y_axis.into(),
            layout,
            labels,
            series,
        })
    }

    /// Name of the rendered artifact, without extension
    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// Chart title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Y-axis name
    pub fn y_axis(&self) -> &str {
        &self.y_axis
    }

    /// Layout
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    /// X-axis labels, one per day
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Series in legend order
    pub fn series(&self) -> &[Series] {
        &self.series
    }
}
