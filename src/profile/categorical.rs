//! Value-frequency counts for non-numeric columns.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::Scalar;

/// Label under which all missing values are bucketed.
pub const MISSING_LABEL: &str = "(missing)";

/// One ranked entry in a value-frequency list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Count distinct values, ranked by frequency.
///
/// Missing values are bucketed under [`MISSING_LABEL`], so the counts always total
/// the number of input values. The list is sorted descending by count; ties keep
/// first-seen order.
pub fn value_counts<'a, I>(values: I) -> Vec<ValueCount>
where
    I: IntoIterator<Item = &'a Scalar>,
{
    let mut counts: Vec<ValueCount> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for v in values {
        let key = if v.is_missing() {
            MISSING_LABEL.to_string()
        } else {
            v.text_form().into_owned()
        };
        match slots.get(&key) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                slots.insert(key.clone(), counts.len());
                counts.push(ValueCount {
                    value: key,
                    count: 1,
                });
            }
        }
    }

    // Stable sort: equal counts stay in insertion order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
