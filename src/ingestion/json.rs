//! JSON ingestion implementation.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"a":1}, {"a":2}]`
//! - A single JSON object (one-row dataset)
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n`
//!
//! There is no schema: the column list is the union of object keys in first-seen
//! order, and keys absent from a record read as [`Scalar::Null`].

use std::fs;
use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{Dataset, Scalar};

/// Ingest JSON into an in-memory [`Dataset`].
pub fn ingest_json_from_path(path: impl AsRef<Path>) -> IngestionResult<Dataset> {
    let text = fs::read_to_string(path)?;
    ingest_json_from_str(&text)
}

/// Ingest JSON from an in-memory string into a [`Dataset`].
pub fn ingest_json_from_str(input: &str) -> IngestionResult<Dataset> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(IngestionError::invalid("json input is empty"));
    }

    // First try parsing as a single JSON value (array or object).
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Array(items)) => ingest_json_values(items),
        Ok(v @ serde_json::Value::Object(_)) => ingest_json_values(vec![v]),
        Ok(_) => Err(IngestionError::invalid(
            "json must be an object, an array of objects, or NDJSON",
        )),
        // Multi-line input that is not one JSON document: fall back to NDJSON.
        Err(_) if trimmed.lines().count() > 1 => {
            let mut values = Vec::new();
            for (i, line) in trimmed.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
                    IngestionError::invalid(format!("invalid ndjson at line {}: {}", i + 1, e))
                })?;
                values.push(v);
            }
            ingest_json_values(values)
        }
        Err(e) => Err(IngestionError::Json(e)),
    }
}

fn ingest_json_values(values: Vec<serde_json::Value>) -> IngestionResult<Dataset> {
    // Column order: union of keys, first appearance wins.
    let mut columns: Vec<String> = Vec::new();
    for (idx0, v) in values.iter().enumerate() {
        let obj = v
            .as_object()
            .ok_or_else(|| IngestionError::invalid(format!("row {} is not a json object", idx0 + 1)))?;
        for key in obj.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    let mut rows: Vec<Vec<Scalar>> = Vec::with_capacity(values.len());
    for v in values {
        let mut obj = match v {
            serde_json::Value::Object(map) => map,
            _ => unreachable!("validated above"),
        };
        let row = columns
            .iter()
            .map(|name| obj.remove(name).map_or(Scalar::Null, convert_json_value))
            .collect();
        rows.push(row);
    }

    Ok(Dataset::new(columns, rows))
}

fn convert_json_value(v: serde_json::Value) -> Scalar {
    match v {
        serde_json::Value::Null => Scalar::Null,
        serde_json::Value::Bool(b) => Scalar::Bool(b),
        serde_json::Value::Number(n) => n.as_f64().map_or(Scalar::Null, Scalar::Number),
        serde_json::Value::String(s) => Scalar::Text(s),
        // Nested arrays/objects keep their compact JSON text.
        other => Scalar::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::ingest_json_from_str;
    use crate::types::Scalar;

    #[test]
    fn array_of_objects_maps_scalars() {
        let ds = ingest_json_from_str(r#"[{"a":1,"b":"x"},{"a":2.5,"b":null}]"#).unwrap();
        assert_eq!(ds.columns, vec!["a", "b"]);
        assert_eq!(ds.rows[0], vec![Scalar::Number(1.0), Scalar::from("x")]);
        assert_eq!(ds.rows[1], vec![Scalar::Number(2.5), Scalar::Null]);
    }

    #[test]
    fn single_object_becomes_one_row() {
        let ds = ingest_json_from_str(r#"{"a":true}"#).unwrap();
        assert_eq!(ds.row_count(), 1);
        assert_eq!(ds.rows[0], vec![Scalar::Bool(true)]);
    }

    #[test]
    fn ndjson_lines_become_rows() {
        let ds = ingest_json_from_str("{\"a\":1}\n{\"a\":2}\n\n{\"a\":3}\n").unwrap();
        assert_eq!(ds.row_count(), 3);
    }

    #[test]
    fn columns_are_the_union_of_keys_in_first_seen_order() {
        let ds = ingest_json_from_str(r#"[{"a":1},{"b":2,"a":3},{"c":4}]"#).unwrap();
        assert_eq!(ds.columns, vec!["a", "b", "c"]);
        assert_eq!(ds.rows[0], vec![Scalar::Number(1.0), Scalar::Null, Scalar::Null]);
        assert_eq!(
            ds.rows[2],
            vec![Scalar::Null, Scalar::Null, Scalar::Number(4.0)]
        );
    }

    #[test]
    fn nested_values_keep_their_json_text() {
        let ds = ingest_json_from_str(r#"[{"a":{"x":1},"b":[1,2]}]"#).unwrap();
        assert_eq!(
            ds.rows[0],
            vec![Scalar::from(r#"{"x":1}"#), Scalar::from("[1,2]")]
        );
    }

    #[test]
    fn scalar_roots_are_rejected() {
        assert!(ingest_json_from_str("42").is_err());
        assert!(ingest_json_from_str("[1,2,3]").is_err());
        assert!(ingest_json_from_str("").is_err());
    }

    #[test]
    fn malformed_single_document_surfaces_a_json_error() {
        let err = ingest_json_from_str("{\"a\": ").unwrap_err();
        assert!(err.to_string().starts_with("json error"));
    }

    #[test]
    fn malformed_ndjson_line_is_reported_with_its_line_number() {
        let err = ingest_json_from_str("{\"a\":1}\nnot json\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
