//! Descriptive statistics and outlier detection for numeric columns.

use std::cmp::Reverse;
use std::collections::HashMap;

use serde::Serialize;

use crate::types::Scalar;

/// Summary statistics over the numeric coercions of a column.
///
/// `variance` is the population variance (divide by N, not N−1), and the quantiles
/// use index truncation (`sorted[floor(N × p)]`) without interpolation. Both are
/// kept as-is for output compatibility; do not "fix" them to sample variance or an
/// interpolated estimator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericStats {
    /// Number of coercible values.
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value; on ties, the first one encountered in input order.
    pub mode: f64,
    pub min: f64,
    pub max: f64,
    /// `max − min`.
    pub range: f64,
    /// Population variance.
    pub variance: f64,
    pub std_dev: f64,
    pub q1: f64,
    pub q3: f64,
    /// `q3 − q1`.
    pub iqr: f64,
}

/// A value outside the Tukey fences, with its position in the input sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outlier {
    /// Zero-based position in the input (row index when profiling a column).
    pub index: usize,
    pub value: f64,
}

/// Fence multiplier for [`outliers`]: `q1 − 1.5×iqr` / `q3 + 1.5×iqr`.
pub const IQR_FENCE_MULTIPLIER: f64 = 1.5;

/// Compute summary statistics for a sequence of raw cell values.
///
/// Values are coerced with [`Scalar::as_number`]; missing and non-numeric entries
/// are dropped. Returns `None` when nothing coerces.
pub fn describe<'a, I>(values: I) -> Option<NumericStats>
where
    I: IntoIterator<Item = &'a Scalar>,
{
    let mut nums: Vec<f64> = values
        .into_iter()
        .filter_map(Scalar::as_number)
        .filter(|v| !v.is_nan())
        .collect();
    if nums.is_empty() {
        return None;
    }

    // Mode looks at input order (first-seen wins ties), so take it before sorting.
    let mode = mode_of(&nums);
    nums.sort_by(f64::total_cmp);

    let n = nums.len();
    let sum: f64 = nums.iter().sum();
    let mean = sum / n as f64;
    let variance = nums.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
    let min = nums[0];
    let max = nums[n - 1];
    let q1 = quantile(&nums, 0.25);
    let median = quantile(&nums, 0.5);
    let q3 = quantile(&nums, 0.75);

    Some(NumericStats {
        count: n,
        sum,
        mean,
        median,
        mode,
        min,
        max,
        range: max - min,
        variance,
        std_dev: variance.sqrt(),
        q1,
        q3,
        iqr: q3 - q1,
    })
}

/// Flag values outside the Tukey fences.
///
/// Fences are computed from [`describe`] over the same input; indices refer to
/// positions in the unsorted input, missing/non-numeric entries included. Returns an
/// empty list when `describe` yields `None`.
pub fn outliers<'a, I>(values: I) -> Vec<Outlier>
where
    I: IntoIterator<Item = &'a Scalar>,
{
    let scalars: Vec<&Scalar> = values.into_iter().collect();
    let Some(stats) = describe(scalars.iter().copied()) else {
        return Vec::new();
    };
    let lower = stats.q1 - IQR_FENCE_MULTIPLIER * stats.iqr;
    let upper = stats.q3 + IQR_FENCE_MULTIPLIER * stats.iqr;

    scalars
        .iter()
        .enumerate()
        .filter_map(|(index, v)| {
            let value = v.as_number().filter(|n| !n.is_nan())?;
            (value < lower || value > upper).then_some(Outlier { index, value })
        })
        .collect()
}

/// Index-truncation quantile over a sorted slice: `sorted[floor(N × p)]`.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let idx = (sorted.len() as f64 * p).floor() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn mode_of(values: &[f64]) -> f64 {
    // Key by bit pattern for exact f64 frequency counting.
    let mut counts: HashMap<u64, (usize, usize)> = HashMap::new();
    for (i, v) in values.iter().enumerate() {
        let entry = counts.entry(v.to_bits()).or_insert((0, i));
        entry.0 += 1;
    }
    let (bits, _) = counts
        .into_iter()
        .max_by_key(|&(_, (count, first))| (count, Reverse(first)))
        .expect("mode_of requires at least one value");
    f64::from_bits(bits)
}
