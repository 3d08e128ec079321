#![cfg(feature = "excel")]

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{IngestionError, IngestionResult};
use crate::types::{Dataset, Scalar};

/// Ingest an Excel document (`.xlsx`, `.xls`, `.ods`, etc.) into an in-memory
/// [`Dataset`].
///
/// Behavior:
/// - Picks `sheet_name` if provided; otherwise uses the first sheet in the workbook
/// - The first non-empty row is the header row and names the columns
/// - Remaining rows convert cell-by-cell onto [`Scalar`]s (no declared schema)
pub fn ingest_excel_from_path(
    path: impl AsRef<Path>,
    sheet_name: Option<&str>,
) -> IngestionResult<Dataset> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet = match sheet_name {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| IngestionError::invalid("workbook has no sheets"))?,
    };

    let range = workbook.worksheet_range(&sheet)?;
    ingest_sheet_range(&sheet, &range)
}

fn ingest_sheet_range(sheet: &str, range: &calamine::Range<Data>) -> IngestionResult<Dataset> {
    let mut rows_iter = range.rows();

    // First non-empty row is the header.
    let header = rows_iter
        .by_ref()
        .find(|row| row.iter().any(|c| !matches!(c, Data::Empty)))
        .ok_or_else(|| {
            IngestionError::invalid(format!(
                "sheet '{sheet}' has no non-empty rows (no header row found)"
            ))
        })?;
    let columns: Vec<String> = header
        .iter()
        .map(|c| cell_to_header_string(c).trim().to_string())
        .collect();

    let mut rows: Vec<Vec<Scalar>> = Vec::new();
    for row in rows_iter {
        let out_row = (0..columns.len())
            .map(|i| convert_cell(row.get(i).unwrap_or(&Data::Empty)))
            .collect();
        rows.push(out_row);
    }

    Ok(Dataset::new(columns, rows))
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(f) => f.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
        Data::Empty => "".to_string(),
    }
}

fn convert_cell(c: &Data) -> Scalar {
    match c {
        Data::Empty => Scalar::Null,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Scalar::Null
            } else {
                Scalar::Text(trimmed.to_owned())
            }
        }
        Data::Int(i) => Scalar::Number(*i as f64),
        Data::Float(f) => Scalar::Number(*f),
        Data::Bool(b) => Scalar::Bool(*b),
        Data::DateTimeIso(s) => Scalar::Text(s.clone()),
        Data::DurationIso(s) => Scalar::Text(s.clone()),
        // Serial datetimes and error cells keep a display form.
        other => Scalar::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::convert_cell;
    use crate::types::Scalar;
    use calamine::Data;

    #[test]
    fn cells_map_onto_scalars() {
        assert_eq!(convert_cell(&Data::Empty), Scalar::Null);
        assert_eq!(convert_cell(&Data::Int(3)), Scalar::Number(3.0));
        assert_eq!(convert_cell(&Data::Float(1.5)), Scalar::Number(1.5));
        assert_eq!(convert_cell(&Data::Bool(true)), Scalar::Bool(true));
        assert_eq!(
            convert_cell(&Data::String(" x ".to_string())),
            Scalar::from("x")
        );
        assert_eq!(
            convert_cell(&Data::String("  ".to_string())),
            Scalar::Null
        );
    }
}
