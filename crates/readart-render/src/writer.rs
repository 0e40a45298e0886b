//! Writes rendered charts into the output directory

use crate::renderer::ChartRenderer;
use readart_core::chart::Chart;
use readart_core::{ReadartError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Renders charts and saves each one as `<file stem>.<extension>`
pub struct ChartWriter {
    output_dir: PathBuf,
    renderer: Box<dyn ChartRenderer>,
}

impl ChartWriter {
    /// Create a writer for `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>, renderer: Box<dyn ChartRenderer>) -> Self {
        Self {
            output_dir: output_dir.into(),
            renderer,
        }
    }

    /// The directory charts are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path a chart will be written to
    pub fn path_for(&self, chart: &Chart) -> PathBuf {
        self.output_dir.join(format!(
            "{}.{}",
            sanitize_file_stem(chart.file_stem()),
            self.renderer.extension()
        ))
    }

    /// Render and write one chart, creating the output directory if needed
    pub fn write(&self, chart: &Chart) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.path_for(chart);
        let rendered = self.renderer.render(chart)?;
        fs::write(&path, rendered)?;
        debug!("Wrote chart '{}' to {}", chart.title(), path.display());
        Ok(path)
    }

    /// Render and write every chart, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` without writing anything when two charts would
    /// be saved to the same file, e.g. a log named `allBooks` or two book names
    /// that only differ in characters replaced by `_`.
    pub fn write_all(&self, charts: &[Chart]) -> Result<Vec<PathBuf>> {
        let mut targets: HashMap<PathBuf, &str> = HashMap::with_capacity(charts.len());
        for chart in charts {
            if let Some(previous) = targets.insert(self.path_for(chart), chart.title()) {
                return Err(ReadartError::InvalidArgument(format!(
                    "charts '{}' and '{}' would both be written to {}",
                    previous,
                    chart.title(),
                    self.path_for(chart).display()
                )));
            }
        }

        let paths = charts
            .iter()
            .map(|chart| self.write(chart))
            .collect::<Result<Vec<_>>>()?;
        info!(
            "Wrote {} charts to {}",
            paths.len(),
            self.output_dir.display()
        );
        Ok(paths)
    }
}

/// Replace characters that cannot appear in a file name
fn sanitize_file_stem(stem: &str) -> String {
    let sanitized: String = stem
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            ch if ch.is_control() => '_',
            ch => ch,
        })
        .collect();
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        "chart".to_string()
    } else {
        sanitized
    }
}
