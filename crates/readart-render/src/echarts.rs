//! Standalone HTML charts drawn by ECharts
//!
//! Each page loads ECharts from a CDN and initializes one line chart from an
//! option object built here. Blank cells become `"-"`, which ECharts leaves
//! undrawn, so a book's line only covers the days it was being read.

use crate::renderer::ChartRenderer;
use readart_core::Result;
use readart_core::chart::{Chart, ChartLayout};
use readart_core::series::Cell;
use serde_json::{Value, json};

const ECHARTS_JS: &str = "https://go-echarts.github.io/go-echarts-assets/assets/echarts.min.js";
const THEME_JS: &str = "https://go-echarts.github.io/go-echarts-assets/assets/themes/infographic.js";
const THEME: &str = "infographic";
const BLANK: &str = "-";

/// Renders charts as HTML pages
#[derive(Debug, Clone)]
pub struct EchartsRenderer {
    /// Chart height in CSS pixels
    pub height: u32,
}

impl Default for EchartsRenderer {
    fn default() -> Self {
        Self { height: 500 }
    }
}

impl EchartsRenderer {
    /// Create a renderer with the default height
    pub fn new() -> Self {
        Self::default()
    }

    fn width(layout: ChartLayout) -> &'static str {
        match layout {
            ChartLayout::Wide => "1440px",
            ChartLayout::Narrow => "720px",
        }
    }

    fn cell_value(cell: &Cell) -> Value {
        match cell {
            Cell::Value(value) => json!(value),
            Cell::Blank => json!(BLANK),
        }
    }

    /// The ECharts option object for a chart
    pub fn option(chart: &Chart) -> Value {
        let show_legend = chart.layout().shows_legend();

        json!({
            "title": { "text": chart.title() },
            "tooltip": { "trigger": "axis" },
            "legend": {
                "show": show_legend,
                "orient": "vertical",
                "align": "right",
                "right": "right",
            },
            "xAxis": {
                "name": "Time",
                "type": "category",
                "data": chart.labels(),
                "axisLabel": { "showMinLabel": true, "showMaxLabel": true },
            },
            "yAxis": {
                "name": chart.y_axis(),
                "type": "value",
            },
            "series": chart.series().iter().map(|series| json!({
                "name": series.name,
                "type": "line",
                "smooth": true,
                "symbol": "none",
                "data": series.cells.iter().map(Self::cell_value).collect::<Vec<_>>(),
            })).collect::<Vec<_>>(),
        })
    }
}

impl ChartRenderer for EchartsRenderer {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, chart: &Chart) -> Result<String> {
        // A literal "</script>" in a book name would end the inline script
        let option = serde_json::to_string(&Self::option(chart))?.replace('<', "\\u003c");
        let title = escape_html(chart.title());
        let width = Self::width(chart.layout());
        let height = self.height;

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <script src="{ECHARTS_JS}"></script>
    <script src="{THEME_JS}"></script>
</head>
<body>
<div class="container">
    <div class="item" id="readart-chart" style="width:{width};height:{height}px;"></div>
</div>
<script type="text/javascript">
    "use strict";
    let chart = echarts.init(document.getElementById("readart-chart"), "{THEME}");
    let option = {option};
    chart.setOption(option);
</script>
</body>
</html>
"#
        ))
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use readart_core::chart::Series;

    fn chart(layout: ChartLayout) -> Chart {
        Chart::new(
            "dune.txt",
            "Dune <annotated>",
            "Page Number",
            layout,
            vec!["1/1".into(), "2/1".into(), "3/1".into()],
            vec![Series {
                name: "dune.txt".to_string(),
                cells: vec![Cell::Value(1.0), Cell::Value(40.0), Cell::Blank],
            }],
        )
        .unwrap()
    }

    #[test]
    fn test_option_marks_blank_cells() {
        let option = EchartsRenderer::option(&chart(ChartLayout::Narrow));
        assert_eq!(option["series"][0]["data"], json!([1.0, 40.0, "-"]));
        assert_eq!(option["xAxis"]["data"], json!(["1/1", "2/1", "3/1"]));
        assert_eq!(option["yAxis"]["name"], "Page Number");
        assert_eq!(option["legend"]["show"], false);
    }

    #[test]
    fn test_wide_chart_has_legend() {
        let option = EchartsRenderer::option(&chart(ChartLayout::Wide));
        assert_eq!(option["legend"]["show"], true);
    }

    #[test]
    fn test_render_html_page() {
        let html = EchartsRenderer::new()
            .render(&chart(ChartLayout::Wide))
            .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Dune &lt;annotated&gt;</title>"));
        assert!(html.contains("width:1440px;height:500px;"));
        assert!(html.contains("\"smooth\":true"));
        assert!(!html.contains("<annotated>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & \"b\""), "a &amp; &quot;b&quot;");
    }
}
