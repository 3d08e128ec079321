//! Chart specifications embedded in model replies.
//!
//! The assistant's markdown reply may carry fenced blocks tagged `chart` whose body
//! is a JSON chart description. [`extract_chart_specs`] pulls those out so a UI can
//! feed them to its charting library. Malformed blocks are skipped, never fatal:
//! a bad chart should not take down an otherwise useful reply.

use serde::{Deserialize, Serialize};

/// Supported chart types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Doughnut,
    Scatter,
}

/// One series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Series label (legend entry).
    #[serde(default)]
    pub label: Option<String>,
    /// Data points, one per label.
    pub data: Vec<f64>,
}

/// Labels plus series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    pub datasets: Vec<ChartSeries>,
}

/// Presentation options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default)]
    pub title: Option<String>,
}

/// A complete chart description parsed from a fenced `chart` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: ChartKind,
    pub data: ChartData,
    #[serde(default)]
    pub options: ChartOptions,
}

/// Extract every well-formed chart specification from a markdown reply.
///
/// Scans for ```` ```chart ```` fences and parses each body as JSON. Blocks that do
/// not parse, or whose shape does not match [`ChartSpec`], are silently dropped.
pub fn extract_chart_specs(reply: &str) -> Vec<ChartSpec> {
    const FENCE_OPEN: &str = "```chart";
    const FENCE_CLOSE: &str = "```";

    let mut out = Vec::new();
    let mut rest = reply;

    while let Some(start) = rest.find(FENCE_OPEN) {
        let after_tag = &rest[start + FENCE_OPEN.len()..];
        // Body starts on the line after the opening fence.
        let Some(line_end) = after_tag.find('\n') else {
            break;
        };
        let body_and_rest = &after_tag[line_end + 1..];
        let Some(close) = body_and_rest.find(FENCE_CLOSE) else {
            break;
        };

        let body = body_and_rest[..close].trim();
        if let Ok(spec) = serde_json::from_str::<ChartSpec>(body) {
            out.push(spec);
        }
        rest = &body_and_rest[close + FENCE_CLOSE.len()..];
    }

    out
}
