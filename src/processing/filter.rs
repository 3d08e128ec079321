//! Condition-based row filtering for [`crate::types::Dataset`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{Dataset, Scalar};

/// Comparison operator in a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Loose equality: numeric when both sides coerce, string forms otherwise.
    Eq,
    /// Negation of [`Operator::Eq`].
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Case-insensitive substring match over string forms.
    Contains,
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eq" => Ok(Operator::Eq),
            "neq" => Ok(Operator::Neq),
            "gt" => Ok(Operator::Gt),
            "gte" => Ok(Operator::Gte),
            "lt" => Ok(Operator::Lt),
            "lte" => Ok(Operator::Lte),
            "contains" => Ok(Operator::Contains),
            other => Err(format!("unknown filter operator '{other}'")),
        }
    }
}

/// A single filter condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub column: String,
    pub operator: Operator,
    pub value: Scalar,
}

impl Condition {
    /// Convenience constructor.
    pub fn new(column: impl Into<String>, operator: Operator, value: impl Into<Scalar>) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
        }
    }
}

/// Returns a new [`Dataset`] with only the rows matching **all** conditions.
///
/// Comparison rules per operator:
///
/// - `eq`/`neq`: if both the cell and the condition value coerce to numbers, compare
///   numerically (so `"10"` equals `10`); otherwise compare string forms.
/// - `gt`/`gte`/`lt`/`lte`: both sides are coerced to numbers; a row fails the
///   condition when either side does not coerce.
/// - `contains`: case-insensitive substring test over string forms.
///
/// Conditions naming unknown columns match nothing.
pub fn filter(dataset: &Dataset, conditions: &[Condition]) -> Dataset {
    let resolved: Vec<(Option<usize>, &Condition)> = conditions
        .iter()
        .map(|c| (dataset.column_index(&c.column), c))
        .collect();

    dataset.filter_rows(|row| {
        resolved.iter().all(|(idx, cond)| match idx {
            Some(idx) => {
                let cell = row.get(*idx).unwrap_or(&Scalar::Null);
                matches(cell, cond.operator, &cond.value)
            }
            None => false,
        })
    })
}

fn matches(cell: &Scalar, op: Operator, rhs: &Scalar) -> bool {
    match op {
        Operator::Eq => loose_eq(cell, rhs),
        Operator::Neq => !loose_eq(cell, rhs),
        Operator::Gt => numeric_cmp(cell, rhs).is_some_and(|(a, b)| a > b),
        Operator::Gte => numeric_cmp(cell, rhs).is_some_and(|(a, b)| a >= b),
        Operator::Lt => numeric_cmp(cell, rhs).is_some_and(|(a, b)| a < b),
        Operator::Lte => numeric_cmp(cell, rhs).is_some_and(|(a, b)| a <= b),
        Operator::Contains => cell
            .text_form()
            .to_lowercase()
            .contains(&rhs.text_form().to_lowercase()),
    }
}

fn loose_eq(cell: &Scalar, rhs: &Scalar) -> bool {
    match (cell.as_number(), rhs.as_number()) {
        (Some(a), Some(b)) => a == b,
        _ => cell.text_form() == rhs.text_form(),
    }
}

fn numeric_cmp(cell: &Scalar, rhs: &Scalar) -> Option<(f64, f64)> {
    Some((cell.as_number()?, rhs.as_number()?))
}
