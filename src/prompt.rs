//! Prompt-context rendering.
//!
//! The profiling summary is handed to an LLM-backed assistant alongside the user's
//! question. [`dataset_context`] renders the textual block that the external prompt
//! builder concatenates with its fixed instruction preamble: per-column facts,
//! notable correlations, and a JSON sample of the leading rows.

use std::fmt::Write;

use crate::profile::DatasetSummary;
use crate::types::Dataset;

/// Number of leading rows included as a JSON sample.
pub const SAMPLE_ROW_LIMIT: usize = 5;

/// Render the data-context block for a dataset and its summary.
///
/// The output is plain text (not markdown-sensitive) and deterministic for a given
/// dataset; it never fails.
pub fn dataset_context(dataset: &Dataset, summary: &DatasetSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Dataset: {} rows x {} columns",
        summary.total_rows, summary.total_columns
    );

    let _ = writeln!(out, "\nColumns:");
    for col in &summary.columns {
        let _ = write!(out, "- {} ({})", col.name, col.column_type);
        if let Some(stats) = &col.stats {
            let _ = write!(
                out,
                ": min={}, max={}, mean={:.2}, median={}, std_dev={:.2}",
                stats.min, stats.max, stats.mean, stats.median, stats.std_dev
            );
        } else if let Some(top) = &col.top_values {
            let rendered: Vec<String> = top
                .iter()
                .take(5)
                .map(|vc| format!("{} ({})", vc.value, vc.count))
                .collect();
            let _ = write!(out, ": top values: {}", rendered.join(", "));
        }
        let _ = writeln!(
            out,
            " | missing: {}, unique: {}",
            col.missing_count, col.unique_count
        );
    }

    if !summary.correlations.is_empty() {
        let _ = writeln!(out, "\nNotable correlations:");
        for corr in &summary.correlations {
            let _ = writeln!(
                out,
                "- {} ~ {}: r = {:.2}",
                corr.column_a, corr.column_b, corr.coefficient
            );
        }
    }

    let _ = writeln!(out, "\nSample rows (first {SAMPLE_ROW_LIMIT}):");
    let _ = writeln!(out, "{}", sample_rows_json(dataset));

    out
}

/// The first [`SAMPLE_ROW_LIMIT`] rows as a JSON array of records.
fn sample_rows_json(dataset: &Dataset) -> String {
    let sample: Vec<serde_json::Value> = dataset
        .rows
        .iter()
        .take(SAMPLE_ROW_LIMIT)
        .map(|row| {
            let record: serde_json::Map<String, serde_json::Value> = dataset
                .columns
                .iter()
                .enumerate()
                .map(|(idx, name)| {
                    let cell = row.get(idx).cloned().unwrap_or(crate::types::Scalar::Null);
                    let value = serde_json::to_value(cell).unwrap_or(serde_json::Value::Null);
                    (name.clone(), value)
                })
                .collect();
            serde_json::Value::Object(record)
        })
        .collect();
    serde_json::Value::Array(sample).to_string()
}

impl DatasetSummary {
    /// Convenience wrapper around [`dataset_context`].
    pub fn to_prompt_context(&self, dataset: &Dataset) -> String {
        dataset_context(dataset, self)
    }
}
