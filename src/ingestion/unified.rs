//! Unified ingestion entrypoint.
//!
//! Most callers should use [`ingest_from_path`], which ingests a file into an
//! in-memory [`crate::types::Dataset`] with no declared schema: columns come from
//! the data itself and the profiler infers their types afterwards.
//!
//! - If [`IngestionOptions::format`] is `None`, the ingestion format is inferred from
//!   the file extension.
//! - If an [`super::observability::IngestionObserver`] is provided, success/failure/
//!   alerts are reported to it.

use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::error::{IngestionError, IngestionResult};
use crate::types::Dataset;

use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};
use super::{csv, json, parquet};

/// Supported ingestion formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionFormat {
    /// Comma-separated values.
    Csv,
    /// JSON array-of-objects or NDJSON.
    Json,
    /// Apache Parquet.
    Parquet,
    /// Spreadsheet/workbook formats (feature-gated behind `excel`).
    Excel,
}

impl IngestionFormat {
    /// Parse an ingestion format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            "parquet" | "pq" => Some(Self::Parquet),
            "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => Some(Self::Excel),
            _ => None,
        }
    }
}

/// Options controlling unified ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct IngestionOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<IngestionFormat>,
    /// Excel sheet to ingest; `None` means the first sheet.
    pub excel_sheet: Option<String>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    ///
    /// `None` falls back to [`IngestionSeverity::Critical`].
    pub alert_at_or_above: Option<IngestionSeverity>,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("format", &self.format)
            .field("excel_sheet", &self.excel_sheet)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl IngestionOptions {
    fn alert_threshold(&self) -> IngestionSeverity {
        self.alert_at_or_above.unwrap_or(IngestionSeverity::Critical)
    }
}

/// Unified ingestion entry point for path-based sources.
///
/// - If `options.format` is `None`, format is inferred from the file extension.
/// - Use `options.excel_sheet` to pick a workbook sheet by name.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row/column count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= the alert threshold
///
/// # Examples
///
/// ## CSV (auto-detect by extension)
///
/// ```no_run
/// use rust_data_profiling::ingestion::{ingest_from_path, IngestionOptions};
/// use rust_data_profiling::profile::summarize;
///
/// # fn main() -> Result<(), rust_data_profiling::IngestionError> {
/// let ds = ingest_from_path("people.csv", &IngestionOptions::default())?;
/// let summary = summarize(&ds);
/// println!("rows={} columns={}", summary.total_rows, summary.total_columns);
/// # Ok(())
/// # }
/// ```
///
/// ## Observability (stderr logging + alert threshold)
///
/// ```no_run
/// use std::sync::Arc;
///
/// use rust_data_profiling::ingestion::{
///     ingest_from_path, IngestionOptions, IngestionSeverity, StdErrObserver,
/// };
///
/// # fn main() -> Result<(), rust_data_profiling::IngestionError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     alert_at_or_above: Some(IngestionSeverity::Critical),
///     ..Default::default()
/// };
///
/// // Missing files are treated as Critical and will trigger `on_alert` here.
/// let _err = ingest_from_path("does_not_exist.csv", &opts).unwrap_err();
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> IngestionResult<Dataset> {
    let path = path.as_ref();
    let fmt = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = IngestionContext {
        path: path.to_path_buf(),
        format: fmt,
    };

    let start = Instant::now();
    let result = match fmt {
        IngestionFormat::Csv => csv::ingest_csv_from_path(path),
        IngestionFormat::Json => json::ingest_json_from_path(path),
        IngestionFormat::Parquet => parquet::ingest_parquet_from_path(path),
        IngestionFormat::Excel => ingest_excel_dispatch(path, options.excel_sheet.as_deref()),
    };
    let elapsed = start.elapsed();

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(
                &ctx,
                IngestionStats {
                    rows: ds.row_count(),
                    columns: ds.column_count(),
                    elapsed,
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_threshold() {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &IngestionError) -> IngestionSeverity {
    match e {
        IngestionError::Io(_) => IngestionSeverity::Critical,
        IngestionError::Parquet(err) => {
            // Best-effort: parquet errors often wrap IO, but not always in a structured way.
            // If we can detect IO in the source chain, treat it as Critical.
            if error_chain_contains_io(err) {
                IngestionSeverity::Critical
            } else {
                IngestionSeverity::Error
            }
        }
        IngestionError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        IngestionError::Json(err) => {
            if err.is_io() {
                IngestionSeverity::Critical
            } else {
                IngestionSeverity::Error
            }
        }
        #[cfg(feature = "excel")]
        IngestionError::Excel(_) => IngestionSeverity::Error,
        IngestionError::InvalidInput { .. } => IngestionSeverity::Error,
    }
}

fn error_chain_contains_io(e: &(dyn StdError + 'static)) -> bool {
    let mut cur: Option<&(dyn StdError + 'static)> = Some(e);
    while let Some(err) = cur {
        if err.is::<std::io::Error>() {
            return true;
        }
        cur = err.source();
    }
    false
}

fn infer_format_from_path(path: &Path) -> IngestionResult<IngestionFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            IngestionError::invalid(format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ))
        })?;

    IngestionFormat::from_extension(ext).ok_or_else(|| {
        IngestionError::invalid(format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ))
    })
}

fn ingest_excel_dispatch(path: &Path, sheet: Option<&str>) -> IngestionResult<Dataset> {
    // Avoid unused warnings when the feature is off.
    let _ = (path, sheet);

    #[cfg(feature = "excel")]
    {
        super::excel::ingest_excel_from_path(path, sheet)
    }

    #[cfg(not(feature = "excel"))]
    {
        Err(IngestionError::invalid(
            "excel ingestion not enabled (enable cargo feature 'excel')",
        ))
    }
}
