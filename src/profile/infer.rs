//! Column type inference.
//!
//! Types are inferred from a bounded sample of non-missing values, evaluated against
//! an ordered detector table. The order is part of the contract: numeric wins over
//! date, date over boolean, and only then does the unique-ratio split decide between
//! categorical and text. A column whose first [`SAMPLE_SIZE`] rows are unrepresentative
//! of the rest can be misclassified; that is an accepted trade-off of sampling, not
//! something the detectors try to correct.

use std::borrow::Cow;
use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::types::Scalar;

/// Inferred column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// No non-missing values.
    Empty,
    /// Whole numbers.
    Integer,
    /// Numbers where at least one sampled string form carries a decimal point.
    Float,
    /// Date or datetime strings.
    Date,
    /// Boolean-like values (`true/false/yes/no/1/0`).
    Boolean,
    /// Repeating non-numeric values (sample unique ratio below 0.5).
    Categorical,
    /// Free-form strings.
    Text,
}

impl ColumnType {
    /// Whether columns of this type carry [`crate::profile::NumericStats`].
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColumnType::Empty => "empty",
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Date => "date",
            ColumnType::Boolean => "boolean",
            ColumnType::Categorical => "categorical",
            ColumnType::Text => "text",
        };
        f.write_str(name)
    }
}

/// Maximum number of non-missing values sampled per column.
pub const SAMPLE_SIZE: usize = 100;

/// Share of the sample that must parse as a number.
const NUMERIC_THRESHOLD: f64 = 0.8;
/// Share of the sample that must parse as a date.
const DATE_THRESHOLD: f64 = 0.8;
/// Share of the sample that must be a boolean-like token.
const BOOLEAN_THRESHOLD: f64 = 0.9;
/// Sample unique ratio below which a column is categorical rather than text.
const CATEGORICAL_UNIQUE_RATIO: f64 = 0.5;

#[derive(Debug, Clone, Copy)]
enum Detected {
    Numeric,
    Date,
    Boolean,
}

/// Ordered detector table. Evaluation stops at the first detector whose share of
/// matching sampled values reaches its threshold.
const DETECTORS: &[(Detected, fn(&str) -> bool, f64)] = &[
    (Detected::Numeric, parses_as_number, NUMERIC_THRESHOLD),
    (Detected::Date, parses_as_date, DATE_THRESHOLD),
    (Detected::Boolean, is_boolean_token, BOOLEAN_THRESHOLD),
];

/// Classify a column's dominant type from its raw cell values.
///
/// Draws up to [`SAMPLE_SIZE`] non-missing values; an empty sample yields
/// [`ColumnType::Empty`]. Detection works on string forms, so `Scalar::Number(1.0)`
/// and `Scalar::Text("1")` are indistinguishable here by design.
pub fn classify<'a, I>(values: I) -> ColumnType
where
    I: IntoIterator<Item = &'a Scalar>,
{
    let sample: Vec<Cow<'a, str>> = values
        .into_iter()
        .filter(|v| !v.is_missing())
        .take(SAMPLE_SIZE)
        .map(Scalar::text_form)
        .collect();

    if sample.is_empty() {
        return ColumnType::Empty;
    }
    let size = sample.len() as f64;

    for (kind, matches, threshold) in DETECTORS {
        let share = sample.iter().filter(|s| matches(s)).count() as f64 / size;
        if share >= *threshold {
            return match kind {
                Detected::Numeric => {
                    if sample.iter().any(|s| s.contains('.')) {
                        ColumnType::Float
                    } else {
                        ColumnType::Integer
                    }
                }
                Detected::Date => ColumnType::Date,
                Detected::Boolean => ColumnType::Boolean,
            };
        }
    }

    let distinct: HashSet<&str> = sample.iter().map(|s| s.as_ref()).collect();
    if (distinct.len() as f64 / size) < CATEGORICAL_UNIQUE_RATIO {
        ColumnType::Categorical
    } else {
        ColumnType::Text
    }
}

fn parses_as_number(s: &str) -> bool {
    s.trim().parse::<f64>().is_ok()
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y"];

fn parses_as_date(s: &str) -> bool {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s).is_ok()
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(s, fmt).is_ok())
        || DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(s, fmt).is_ok())
}

fn is_boolean_token(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "true" | "false" | "yes" | "no" | "1" | "0"
    )
}

#[cfg(test)]
mod tests {
    use super::{classify, ColumnType, SAMPLE_SIZE};
    use crate::types::Scalar;

    fn texts(values: &[&str]) -> Vec<Scalar> {
        values.iter().map(|v| Scalar::from(*v)).collect()
    }

    #[test]
    fn empty_and_all_missing_classify_as_empty() {
        assert_eq!(classify(&[] as &[Scalar]), ColumnType::Empty);
        let missing = vec![Scalar::Null, Scalar::Text(String::new())];
        assert_eq!(classify(&missing), ColumnType::Empty);
    }

    #[test]
    fn integer_and_float_split_on_decimal_point() {
        assert_eq!(classify(&texts(&["1", "2", "3"])), ColumnType::Integer);
        assert_eq!(classify(&texts(&["1.5", "2.5"])), ColumnType::Float);
        // One decimal value makes the whole column float.
        assert_eq!(classify(&texts(&["1", "2.5", "3"])), ColumnType::Float);
    }

    #[test]
    fn numeric_threshold_is_eighty_percent_of_sample() {
        // 4 of 5 parse: exactly at the threshold.
        assert_eq!(
            classify(&texts(&["1", "2", "3", "4", "x"])),
            ColumnType::Integer
        );
        // 3 of 5 parse: below the threshold, falls through to text.
        assert_eq!(
            classify(&texts(&["1", "2", "3", "x", "y"])),
            ColumnType::Text
        );
    }

    #[test]
    fn numeric_wins_over_boolean_for_binary_digits() {
        // "1"/"0" are boolean tokens, but the numeric detector runs first.
        assert_eq!(classify(&texts(&["1", "0", "1", "0"])), ColumnType::Integer);
    }

    #[test]
    fn date_detection_accepts_common_formats() {
        assert_eq!(
            classify(&texts(&["2024-01-01", "2024-02-15", "2024-03-30"])),
            ColumnType::Date
        );
        assert_eq!(
            classify(&texts(&["01/15/2024", "02/20/2024"])),
            ColumnType::Date
        );
        assert_eq!(
            classify(&texts(&["2024-01-01T10:00:00", "2024-01-02T11:30:00"])),
            ColumnType::Date
        );
    }

    #[test]
    fn boolean_detection_is_case_insensitive() {
        assert_eq!(
            classify(&texts(&["yes", "No", "YES", "no"])),
            ColumnType::Boolean
        );
        let bools = vec![Scalar::Bool(true), Scalar::Bool(false), Scalar::Bool(true)];
        assert_eq!(classify(&bools), ColumnType::Boolean);
    }

    #[test]
    fn unique_ratio_splits_categorical_from_text() {
        assert_eq!(
            classify(&texts(&["a", "b", "a", "b", "a", "b"])),
            ColumnType::Categorical
        );
        assert_eq!(
            classify(&texts(&["alpha", "beta", "gamma", "delta"])),
            ColumnType::Text
        );
    }

    #[test]
    fn missing_values_are_excluded_from_the_sample() {
        let values = vec![
            Scalar::Null,
            Scalar::from("1"),
            Scalar::Text(String::new()),
            Scalar::from("2"),
        ];
        assert_eq!(classify(&values), ColumnType::Integer);
    }

    #[test]
    fn classification_only_sees_the_sample_prefix() {
        // Numeric in the first SAMPLE_SIZE values, text afterwards: the tail is
        // never inspected.
        let mut values: Vec<Scalar> = (0..SAMPLE_SIZE as i64).map(Scalar::from).collect();
        values.extend(texts(&["x"; 200]));
        assert_eq!(classify(&values), ColumnType::Integer);
    }
}
