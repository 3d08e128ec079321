//! Dataset profiling.
//!
//! The profiling layer is a pure function of its input: [`summarize`] walks a
//! [`Dataset`] once and produces a [`DatasetSummary`]: per-column type and
//! statistics, notable cross-column correlations, and plain-language insights.
//! Nothing is cached or mutated; calling it twice on the same dataset produces
//! identical output, and concurrent calls on independent datasets are safe.
//!
//! Missing data is expected input, not an error: an all-missing column profiles as
//! [`ColumnType::Empty`] with no statistics, and summary generation always succeeds
//! for a well-formed dataset.
//!
//! ## Example
//!
//! ```rust
//! use rust_data_profiling::profile::{summarize, ColumnType};
//! use rust_data_profiling::types::{Dataset, Scalar};
//!
//! let ds = Dataset::new(
//!     vec!["a".to_string(), "b".to_string()],
//!     vec![
//!         vec![Scalar::from(1i64), Scalar::from("x")],
//!         vec![Scalar::from(2i64), Scalar::from("y")],
//!         vec![Scalar::from(3i64), Scalar::from("x")],
//!     ],
//! );
//!
//! let summary = summarize(&ds);
//! assert_eq!(summary.total_rows, 3);
//! assert_eq!(summary.columns[0].column_type, ColumnType::Integer);
//! assert_eq!(summary.columns[0].stats.as_ref().unwrap().mean, 2.0);
//! ```

pub mod categorical;
pub mod correlate;
pub mod infer;
pub mod insights;
pub mod stats;

use std::collections::HashSet;

use serde::Serialize;

use crate::types::{Dataset, Scalar};

pub use categorical::{value_counts, ValueCount, MISSING_LABEL};
pub use correlate::{pearson, Correlation, MAX_CORRELATED_COLUMNS, NOTABLE_THRESHOLD};
pub use infer::{classify, ColumnType, SAMPLE_SIZE};
pub use insights::{
    generate_insights, Insight, InsightKind, HIGH_CARDINALITY_THRESHOLD,
    STRONG_CORRELATION_THRESHOLD,
};
pub use stats::{describe, outliers, NumericStats, Outlier, IQR_FENCE_MULTIPLIER};

/// Maximum number of ranked values kept on a non-numeric column profile.
pub const TOP_VALUES_LIMIT: usize = 10;

/// Derived, immutable profile of a single column.
///
/// Numeric columns carry `stats` (plus any `outliers`); all other non-empty types
/// carry `top_values`; empty columns carry neither.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub column_type: ColumnType,
    /// Number of missing cells (null, absent, or empty string).
    pub missing_count: usize,
    /// Number of distinct non-missing values in the full column.
    pub unique_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<NumericStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_values: Option<Vec<ValueCount>>,
    /// IQR-fence outliers for numeric columns; always empty otherwise.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outliers: Vec<Outlier>,
}

/// Complete summary of one profiling pass over a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total_rows: usize,
    pub total_columns: usize,
    /// One profile per column, in dataset column order.
    pub columns: Vec<ColumnProfile>,
    /// Notable correlations (`|r| > 0.3`) among the leading numeric columns.
    pub correlations: Vec<Correlation>,
    pub insights: Vec<Insight>,
}

/// Profile a single column from its raw cell values.
pub fn profile_column(name: &str, values: &[&Scalar]) -> ColumnProfile {
    let missing_count = values.iter().filter(|v| v.is_missing()).count();
    let unique_count = {
        let distinct: HashSet<_> = values
            .iter()
            .filter(|v| !v.is_missing())
            .map(|v| v.text_form())
            .collect();
        distinct.len()
    };

    let column_type = classify(values.iter().copied());
    let (stats, top_values, outliers) = match column_type {
        ColumnType::Integer | ColumnType::Float => (
            describe(values.iter().copied()),
            None,
            stats::outliers(values.iter().copied()),
        ),
        ColumnType::Empty => (None, None, Vec::new()),
        _ => {
            let mut counts = value_counts(values.iter().copied());
            counts.truncate(TOP_VALUES_LIMIT);
            (None, Some(counts), Vec::new())
        }
    };

    ColumnProfile {
        name: name.to_string(),
        column_type,
        missing_count,
        unique_count,
        stats,
        top_values,
        outliers,
    }
}

/// Profile an entire dataset.
///
/// This is the crate's central entry point: one synchronous pass, no I/O, no shared
/// state. Callers that need to bound latency on very large datasets should sample
/// rows before calling; only type inference limits itself internally.
pub fn summarize(dataset: &Dataset) -> DatasetSummary {
    let columns: Vec<ColumnProfile> = dataset
        .columns
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values: Vec<&Scalar> = dataset.column_values(idx).collect();
            profile_column(name, &values)
        })
        .collect();

    let correlations = correlate::notable_correlations(dataset, &columns);
    let insights = generate_insights(
        dataset.row_count(),
        dataset.column_count(),
        &columns,
        &correlations,
    );

    DatasetSummary {
        total_rows: dataset.row_count(),
        total_columns: dataset.column_count(),
        columns,
        correlations,
        insights,
    }
}
