//! Plain-language findings derived from a dataset summary.
//!
//! Insight generation is deterministic: the same summary always yields the same
//! messages in the same order. The emission order is fixed: dataset shape, worst
//! missing column, outliers, strong correlations, high-cardinality columns; and
//! within the last two steps entries follow the order they hold in the summary.

use serde::{Deserialize, Serialize};

use crate::profile::{ColumnProfile, ColumnType, Correlation};

/// Severity/kind tag on an [`Insight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Neutral observation.
    Info,
    /// Data quality concern.
    Warning,
    /// Analytical finding.
    Insight,
}

/// A short derived statement about the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
}

/// Correlations stronger than this get their own insight (a stricter sub-threshold
/// of the retention threshold in [`crate::profile::correlate`]).
pub const STRONG_CORRELATION_THRESHOLD: f64 = 0.7;

/// Categorical columns with more distinct values than this are called out.
pub const HIGH_CARDINALITY_THRESHOLD: usize = 50;

/// Generate the insight list for a summary.
///
/// `columns` and `correlations` must be the summary's own lists, in summary order.
pub fn generate_insights(
    total_rows: usize,
    total_columns: usize,
    columns: &[ColumnProfile],
    correlations: &[Correlation],
) -> Vec<Insight> {
    let mut out = Vec::new();

    out.push(Insight {
        kind: InsightKind::Info,
        message: format!("Dataset contains {total_rows} rows and {total_columns} columns."),
    });

    // Worst column by missing count (not percentage); first one wins ties.
    let mut worst: Option<&ColumnProfile> = None;
    for col in columns {
        if col.missing_count > 0 && worst.is_none_or(|w| col.missing_count > w.missing_count) {
            worst = Some(col);
        }
    }
    if let Some(col) = worst {
        let pct = col.missing_count as f64 / total_rows as f64 * 100.0;
        out.push(Insight {
            kind: InsightKind::Warning,
            message: format!(
                "Column '{}' has {:.1}% missing values ({} of {} rows).",
                col.name, pct, col.missing_count, total_rows
            ),
        });
    }

    let total_outliers: usize = columns.iter().map(|c| c.outliers.len()).sum();
    if total_outliers > 0 {
        let affected = columns.iter().filter(|c| !c.outliers.is_empty()).count();
        out.push(Insight {
            kind: InsightKind::Insight,
            message: format!(
                "Found {total_outliers} outlier value(s) across {affected} numeric column(s)."
            ),
        });
    }

    for corr in correlations {
        if corr.coefficient.abs() > STRONG_CORRELATION_THRESHOLD {
            let direction = if corr.coefficient > 0.0 {
                "positive"
            } else {
                "negative"
            };
            out.push(Insight {
                kind: InsightKind::Insight,
                message: format!(
                    "Strong {direction} correlation between '{}' and '{}' (r = {:.2}).",
                    corr.column_a, corr.column_b, corr.coefficient
                ),
            });
        }
    }

    for col in columns {
        if col.column_type == ColumnType::Categorical
            && col.unique_count > HIGH_CARDINALITY_THRESHOLD
        {
            out.push(Insight {
                kind: InsightKind::Info,
                message: format!(
                    "Column '{}' has high cardinality with {} distinct values.",
                    col.name, col.unique_count
                ),
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{generate_insights, InsightKind};
    use crate::profile::{ColumnProfile, ColumnType, Correlation, Outlier};

    fn column(name: &str, column_type: ColumnType) -> ColumnProfile {
        ColumnProfile {
            name: name.to_string(),
            column_type,
            missing_count: 0,
            unique_count: 0,
            stats: None,
            top_values: None,
            outliers: Vec::new(),
        }
    }

    #[test]
    fn shape_info_is_always_first() {
        let out = generate_insights(10, 3, &[], &[]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, InsightKind::Info);
        assert!(out[0].message.contains("10 rows"));
        assert!(out[0].message.contains("3 columns"));
    }

    #[test]
    fn missing_warning_names_highest_count_first_on_ties() {
        let mut a = column("a", ColumnType::Integer);
        a.missing_count = 3;
        let mut b = column("b", ColumnType::Text);
        b.missing_count = 5;
        let mut c = column("c", ColumnType::Text);
        c.missing_count = 5;

        let out = generate_insights(10, 3, &[a, b, c], &[]);
        assert_eq!(out[1].kind, InsightKind::Warning);
        assert!(out[1].message.contains("'b'"));
        assert!(out[1].message.contains("50.0%"));
    }

    #[test]
    fn outlier_insight_sums_across_columns() {
        let mut a = column("a", ColumnType::Integer);
        a.outliers = vec![
            Outlier {
                index: 0,
                value: 99.0,
            },
            Outlier {
                index: 4,
                value: -50.0,
            },
        ];
        let mut b = column("b", ColumnType::Float);
        b.outliers = vec![Outlier {
            index: 2,
            value: 1e6,
        }];

        let out = generate_insights(10, 2, &[a, b], &[]);
        assert_eq!(out[1].kind, InsightKind::Insight);
        assert!(out[1].message.contains("3 outlier value(s)"));
        assert!(out[1].message.contains("2 numeric column(s)"));
    }

    #[test]
    fn only_strong_correlations_emit_insights() {
        let correlations = vec![
            Correlation {
                column_a: "x".to_string(),
                column_b: "y".to_string(),
                coefficient: 0.95,
            },
            Correlation {
                column_a: "x".to_string(),
                column_b: "z".to_string(),
                coefficient: 0.5,
            },
            Correlation {
                column_a: "y".to_string(),
                column_b: "z".to_string(),
                coefficient: -0.8,
            },
        ];
        let out = generate_insights(10, 3, &[], &correlations);

        let corr_messages: Vec<&str> = out[1..].iter().map(|i| i.message.as_str()).collect();
        assert_eq!(corr_messages.len(), 2);
        assert!(corr_messages[0].contains("positive"));
        assert!(corr_messages[0].contains("'x'"));
        assert!(corr_messages[1].contains("negative"));
        assert!(corr_messages[1].contains("'z'"));
    }

    #[test]
    fn high_cardinality_applies_to_categorical_columns_only() {
        let mut cat = column("tags", ColumnType::Categorical);
        cat.unique_count = 120;
        let mut text = column("notes", ColumnType::Text);
        text.unique_count = 500;

        let out = generate_insights(1000, 2, &[cat, text], &[]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].kind, InsightKind::Info);
        assert!(out[1].message.contains("'tags'"));
        assert!(out[1].message.contains("120"));
    }

    #[test]
    fn emission_order_is_fixed() {
        let mut missing = column("m", ColumnType::Text);
        missing.missing_count = 1;
        let mut outlying = column("o", ColumnType::Integer);
        outlying.outliers = vec![Outlier {
            index: 0,
            value: 9.0,
        }];
        let mut wide = column("w", ColumnType::Categorical);
        wide.unique_count = 99;
        let correlations = vec![Correlation {
            column_a: "o".to_string(),
            column_b: "m".to_string(),
            coefficient: 0.9,
        }];

        let out = generate_insights(5, 3, &[missing, outlying, wide], &correlations);
        let kinds: Vec<InsightKind> = out.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::Info,
                InsightKind::Warning,
                InsightKind::Insight,
                InsightKind::Insight,
                InsightKind::Info,
            ]
        );
    }
}
