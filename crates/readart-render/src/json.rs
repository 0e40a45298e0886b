//! Charts as JSON documents, for plotting with other tools

use crate::renderer::ChartRenderer;
use readart_core::Result;
use readart_core::chart::Chart;

/// Renders the chart model as pretty-printed JSON, blank cells as `null`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ChartRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, chart: &Chart) -> Result<String> {
        Ok(serde_json::to_string_pretty(chart)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readart_core::chart::{ChartLayout, Series};
    use readart_core::series::Cell;
    use serde_json::{Value, json};

    #[test]
    fn test_render_json() {
        let chart = Chart::new(
            "Running 14 day average",
            "Running 14 day average",
            "Page Count",
            ChartLayout::Narrow,
            vec!["March".into(), "March".into()],
            vec![Series {
                name: "Avg pages per 14 days".to_string(),
                cells: vec![Cell::Value(0.0), Cell::Blank],
            }],
        )
        .unwrap();

        let rendered = JsonRenderer.render(&chart).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["file_stem"], "Running 14 day average");
        assert_eq!(value["layout"], "narrow");
        assert_eq!(value["series"][0]["cells"], json!([0.0, null]));
    }
}
