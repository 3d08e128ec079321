//! Parquet ingestion implementation.

use std::path::Path;

use parquet::file::reader::FileReader;
use parquet::file::serialized_reader::SerializedFileReader;
use parquet::record::Field;

use crate::error::IngestionResult;
use crate::types::{Dataset, Scalar};

/// Ingest a Parquet file into an in-memory [`Dataset`].
///
/// Notes:
/// - All columns are read, in file schema order; there is no projection. Flat
///   schemas are assumed; nested groups are not aligned to the leaf column list.
/// - Uses the Parquet record API (`RowIter`); physical values map onto [`Scalar`]
///   (integers and floats → `Number`, booleans → `Bool`, strings → `Text`,
///   anything else keeps its display form as text).
pub fn ingest_parquet_from_path(path: impl AsRef<Path>) -> IngestionResult<Dataset> {
    let reader = SerializedFileReader::try_from(path.as_ref())?;

    let columns: Vec<String> = reader
        .metadata()
        .file_metadata()
        .schema_descr()
        .columns()
        .iter()
        .map(|c| c.path().string())
        .collect();

    let mut rows: Vec<Vec<Scalar>> = Vec::new();
    for row_res in reader.into_iter() {
        let row = row_res?;
        let mut out_row: Vec<Scalar> = Vec::with_capacity(columns.len());
        for (_, field) in row.get_column_iter() {
            out_row.push(convert_parquet_field(field));
        }
        rows.push(out_row);
    }

    Ok(Dataset::new(columns, rows))
}

fn convert_parquet_field(f: &Field) -> Scalar {
    match f {
        Field::Null => Scalar::Null,
        Field::Bool(b) => Scalar::Bool(*b),
        Field::Byte(v) => Scalar::Number(f64::from(*v)),
        Field::Short(v) => Scalar::Number(f64::from(*v)),
        Field::Int(v) => Scalar::Number(f64::from(*v)),
        Field::Long(v) => Scalar::Number(*v as f64),
        Field::UByte(v) => Scalar::Number(f64::from(*v)),
        Field::UShort(v) => Scalar::Number(f64::from(*v)),
        Field::UInt(v) => Scalar::Number(f64::from(*v)),
        Field::ULong(v) => Scalar::Number(*v as f64),
        Field::Float(v) => Scalar::Number(f64::from(*v)),
        Field::Double(v) => Scalar::Number(*v),
        Field::Str(s) => Scalar::Text(s.clone()),
        other => Scalar::Text(other.to_string()),
    }
}
