//! CSV ingestion implementation.

use std::path::Path;

use crate::error::IngestionResult;
use crate::types::{Dataset, Scalar};

/// Ingest a CSV file into an in-memory [`Dataset`].
///
/// Rules:
///
/// - The CSV must have a header row; it names the columns.
/// - Cells are kept as raw trimmed text; no type conversion happens here, the
///   profiler infers column types from the raw values.
/// - Empty cells become [`Scalar::Null`].
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> IngestionResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> IngestionResult<Dataset> {
    let columns: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows: Vec<Vec<Scalar>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = (0..columns.len())
            .map(|i| parse_cell(record.get(i).unwrap_or("")))
            .collect();
        rows.push(row);
    }

    Ok(Dataset::new(columns, rows))
}

fn parse_cell(raw: &str) -> Scalar {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Scalar::Null
    } else {
        Scalar::Text(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::ingest_csv_from_reader;
    use crate::types::Scalar;

    fn reader(input: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input.as_bytes())
    }

    #[test]
    fn headers_become_columns_and_cells_stay_raw() {
        let input = "id,name,score\n1,Ada,98.5\n2,Lin,77\n";
        let ds = ingest_csv_from_reader(&mut reader(input)).unwrap();

        assert_eq!(ds.columns, vec!["id", "name", "score"]);
        assert_eq!(ds.row_count(), 2);
        assert_eq!(
            ds.rows[0],
            vec![
                Scalar::from("1"),
                Scalar::from("Ada"),
                Scalar::from("98.5"),
            ]
        );
    }

    #[test]
    fn empty_cells_become_null() {
        let input = "a,b\n1,\n,2\n";
        let ds = ingest_csv_from_reader(&mut reader(input)).unwrap();
        assert_eq!(ds.rows[0], vec![Scalar::from("1"), Scalar::Null]);
        assert_eq!(ds.rows[1], vec![Scalar::Null, Scalar::from("2")]);
    }

    #[test]
    fn cells_and_headers_are_trimmed() {
        let input = " a , b \n x , 1 \n";
        let ds = ingest_csv_from_reader(&mut reader(input)).unwrap();
        assert_eq!(ds.columns, vec!["a", "b"]);
        assert_eq!(ds.rows[0], vec![Scalar::from("x"), Scalar::from("1")]);
    }

    #[test]
    fn short_rows_pad_with_null() {
        let input = "a,b,c\n1,2\n";
        let ds = ingest_csv_from_reader(&mut reader(input)).unwrap();
        assert_eq!(
            ds.rows[0],
            vec![Scalar::from("1"), Scalar::from("2"), Scalar::Null]
        );
    }
}
