//! Top-N ranking for [`crate::types::Dataset`].

use crate::types::{Dataset, Scalar};

/// Return the first `n` rows of the dataset sorted by the numeric coercion of
/// `column`.
///
/// Sorting is descending by default (`ascending = false`). Cells that do not coerce
/// rank as `0`; the ranking policy differs from the statistics policy (which drops
/// them) on purpose. The sort is stable, so equal keys keep their input order.
///
/// Returns `None` if `column` does not exist.
pub fn top_n(dataset: &Dataset, column: &str, n: usize, ascending: bool) -> Option<Dataset> {
    let idx = dataset.column_index(column)?;

    let mut rows = dataset.rows.clone();
    let sort_key = |row: &Vec<Scalar>| -> f64 {
        row.get(idx)
            .and_then(Scalar::as_number)
            .filter(|v| !v.is_nan())
            .unwrap_or(0.0)
    };
    if ascending {
        rows.sort_by(|a, b| sort_key(a).total_cmp(&sort_key(b)));
    } else {
        rows.sort_by(|a, b| sort_key(b).total_cmp(&sort_key(a)));
    }
    rows.truncate(n);

    Some(Dataset::new(dataset.columns.clone(), rows))
}
