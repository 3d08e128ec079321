//! Group-by aggregation over a [`crate::types::Dataset`].

use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;

use crate::types::{Dataset, Scalar};

/// Built-in aggregation functions over a single value column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFn {
    /// Sum of coercible values. Empty group: `0`.
    Sum,
    /// Arithmetic mean of coercible values. Empty group: `NaN`.
    Avg,
    /// Count of rows in the group (missing and non-numeric included).
    Count,
    /// Minimum coercible value. Empty group: `+∞`.
    Min,
    /// Maximum coercible value. Empty group: `−∞`.
    Max,
}

impl FromStr for AggregateFn {
    type Err = String;

    /// Accepts `sum`, `avg`/`mean`, `count`, `min`, `max` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sum" => Ok(AggregateFn::Sum),
            "avg" | "mean" => Ok(AggregateFn::Avg),
            "count" => Ok(AggregateFn::Count),
            "min" => Ok(AggregateFn::Min),
            "max" => Ok(AggregateFn::Max),
            other => Err(format!("unknown aggregate function '{other}'")),
        }
    }
}

/// One output row of [`aggregate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    /// The group key: the raw string form of the group-by cell (missing → `""`).
    pub key: String,
    pub value: f64,
}

/// Group rows by the raw value of `group_by` and reduce `value_column` per group.
///
/// - Grouping uses the group-by cell's string form, unparsed; rows with a missing
///   group-by cell collect under the empty-string key.
/// - Within each group, `value_column` is coerced per row and non-numeric entries
///   are silently dropped from the reduction. A group with no coercible values
///   therefore reduces to `NaN` (`avg`) or `±∞` (`min`/`max`); this matches the
///   reference behavior and is intentionally not guarded.
/// - Result rows are sorted descending by aggregated value (total order, so `NaN`
///   sorts above `+∞`), ties in first-seen group order.
///
/// Returns `None` if either column does not exist.
pub fn aggregate(
    dataset: &Dataset,
    group_by: &str,
    value_column: &str,
    op: AggregateFn,
) -> Option<Vec<AggregateRow>> {
    let group_idx = dataset.column_index(group_by)?;
    let value_idx = dataset.column_index(value_column)?;

    // Insertion-ordered groups: key -> (count, coercible values).
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, (usize, Vec<f64>)> = HashMap::new();

    for row in &dataset.rows {
        let key = row
            .get(group_idx)
            .unwrap_or(&Scalar::Null)
            .text_form()
            .into_owned();
        let entry = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            (0, Vec::new())
        });
        entry.0 += 1;
        if let Some(v) = row.get(value_idx).and_then(Scalar::as_number) {
            if !v.is_nan() {
                entry.1.push(v);
            }
        }
    }

    let mut out: Vec<AggregateRow> = order
        .into_iter()
        .map(|key| {
            let (count, values) = groups.remove(&key).expect("group recorded in order");
            let value = match op {
                AggregateFn::Sum => values.iter().sum(),
                AggregateFn::Avg => values.iter().sum::<f64>() / values.len() as f64,
                AggregateFn::Count => count as f64,
                AggregateFn::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
                AggregateFn::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            };
            AggregateRow { key, value }
        })
        .collect();

    out.sort_by(|a, b| b.value.total_cmp(&a.value));
    Some(out)
}
