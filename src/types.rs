//! Core data model types for profiling.
//!
//! This crate profiles an in-memory [`Dataset`]: an ordered list of column names plus
//! row-major [`Scalar`] storage. Datasets are deliberately untyped: column types are
//! inferred by the profiler, not declared up front.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell value in a [`Dataset`].
///
/// Serializes untagged, so scalars round-trip as native JSON values
/// (`null`, numbers, booleans, strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Missing/empty value.
    Null,
    /// 64-bit float. Integers are stored in this variant too.
    Number(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Text(String),
}

impl Scalar {
    /// Returns `true` if this value counts as missing.
    ///
    /// Missing means `Null` or an empty string: absent cells, explicit nulls, and
    /// empty CSV fields are all treated the same way by the profiler.
    pub fn is_missing(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Coerce this value into an arithmetic context.
    ///
    /// Conversion rules, used by every numeric operation in the crate:
    ///
    /// - `Number` → itself (including non-finite values)
    /// - `Text` → parsed `f64` if the trimmed string parses, else `None`
    /// - `Null`, `Bool`, non-numeric `Text` → `None`
    ///
    /// Callers decide per operation whether a failed coercion is dropped
    /// (statistics) or treated as `0` (ranking).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// The value's string form, used for equality, grouping, and substring contexts.
    ///
    /// `Null` maps to the empty string; numbers use their `Display` form (so `2.0`
    /// renders as `"2"`).
    pub fn text_form(&self) -> Cow<'_, str> {
        match self {
            Scalar::Null => Cow::Borrowed(""),
            Scalar::Number(n) => Cow::Owned(n.to_string()),
            Scalar::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Scalar::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text_form())
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Number(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Number(v as f64)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Scalar>>` in the same order as `columns`. Rows shorter
/// than the column list read as `Null` in the trailing positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    /// Ordered column names.
    pub columns: Vec<String>,
    /// Row-major value storage.
    pub rows: Vec<Vec<Scalar>>,
}

impl Dataset {
    /// Create a dataset from column names and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Scalar>>) -> Self {
        Self { columns, rows }
    }

    /// Create a dataset from a sequence of records (column name → scalar maps).
    ///
    /// `columns` fixes the column order; keys absent from a record become
    /// [`Scalar::Null`]. Keys not listed in `columns` are dropped.
    pub fn from_records<I>(columns: Vec<String>, records: I) -> Self
    where
        I: IntoIterator<Item = HashMap<String, Scalar>>,
    {
        let rows = records
            .into_iter()
            .map(|mut record| {
                columns
                    .iter()
                    .map(|name| record.remove(name).unwrap_or(Scalar::Null))
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the dataset.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the index of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate a column's cells top to bottom. Short rows read as `Null`.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Scalar> {
        self.rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(&Scalar::Null))
    }

    /// Create a new dataset containing only rows that match `predicate`.
    ///
    /// The returned dataset preserves the original column list.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Scalar]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }
}
