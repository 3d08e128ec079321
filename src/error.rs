use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by ingestion functions.
///
/// This is a single error enum shared across CSV/JSON/Parquet (and optional Excel)
/// ingestion. The profiling core itself never returns errors: once a [`crate::types::Dataset`]
/// exists, every summary operation succeeds.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "excel")]
    /// Excel ingestion error (feature-gated behind `excel`).
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON ingestion error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parquet ingestion error.
    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// The input is structurally unusable (no header row, unsupported JSON shape,
    /// undetectable format, ...).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl IngestionError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        IngestionError::InvalidInput {
            message: message.into(),
        }
    }
}
