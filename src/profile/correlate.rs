//! Pairwise Pearson correlation between numeric columns.

use serde::Serialize;

use crate::profile::ColumnProfile;
use crate::types::{Dataset, Scalar};

/// A correlated column pair retained in the summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Correlation {
    pub column_a: String,
    pub column_b: String,
    /// Pearson coefficient in `[-1, 1]`.
    pub coefficient: f64,
}

/// At most this many numeric columns (by appearance order) are compared pairwise
/// when building a summary. This is a cost bound, not an accuracy choice (at most 10 pairs).
pub const MAX_CORRELATED_COLUMNS: usize = 5;

/// Correlations with `|r|` at or below this are computed but not retained.
pub const NOTABLE_THRESHOLD: f64 = 0.3;

/// Pearson correlation over the first `min(len(x), len(y))` paired elements.
///
/// Both sides are coerced with [`Scalar::as_number`]; pairs where either side does
/// not coerce are dropped. Returns `None` with fewer than 2 usable pairs, and `0.0`
/// (not `None`) when either series has zero variance, so a constant column never
/// propagates NaN into the summary.
pub fn pearson<'a, I, J>(x: I, y: J) -> Option<f64>
where
    I: IntoIterator<Item = &'a Scalar>,
    J: IntoIterator<Item = &'a Scalar>,
{
    let pairs: Vec<(f64, f64)> = x
        .into_iter()
        .zip(y)
        .filter_map(|(a, b)| {
            let a = a.as_number().filter(|v| !v.is_nan())?;
            let b = b.as_number().filter(|v| !v.is_nan())?;
            Some((a, b))
        })
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2, mut sum_y2) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (a, b) in &pairs {
        sum_x += a;
        sum_y += b;
        sum_xy += a * b;
        sum_x2 += a * a;
        sum_y2 += b * b;
    }

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();
    if denominator == 0.0 {
        return Some(0.0);
    }
    Some(numerator / denominator)
}

/// Compute the correlations retained in a [`crate::profile::DatasetSummary`].
///
/// Compares the first [`MAX_CORRELATED_COLUMNS`] numeric columns pairwise and keeps
/// pairs with `|r| >` [`NOTABLE_THRESHOLD`], in column-pair order.
pub(crate) fn notable_correlations(
    dataset: &Dataset,
    profiles: &[ColumnProfile],
) -> Vec<Correlation> {
    let numeric: Vec<usize> = profiles
        .iter()
        .enumerate()
        .filter(|(_, p)| p.column_type.is_numeric())
        .map(|(idx, _)| idx)
        .take(MAX_CORRELATED_COLUMNS)
        .collect();

    let mut out = Vec::new();
    for (pos, &i) in numeric.iter().enumerate() {
        for &j in &numeric[pos + 1..] {
            let Some(r) = pearson(dataset.column_values(i), dataset.column_values(j)) else {
                continue;
            };
            if r.abs() > NOTABLE_THRESHOLD {
                out.push(Correlation {
                    column_a: dataset.columns[i].clone(),
                    column_b: dataset.columns[j].clone(),
                    coefficient: r,
                });
            }
        }
    }
    out
}
