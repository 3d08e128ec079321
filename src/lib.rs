//! `rust-data-profiling` is a small library for profiling in-memory tabular datasets:
//! per-column type inference and statistics, cross-column correlations, and
//! plain-language insights, plus the aggregation/filter/ranking utilities an
//! analysis UI needs on top.
//!
//! The primary entrypoint is [`profile::summarize`], which turns a
//! [`types::Dataset`] into a [`profile::DatasetSummary`] in one pure, synchronous
//! pass. Datasets come from wherever you like: build them in memory from records,
//! or use [`ingestion::ingest_from_path`] to load CSV/JSON/Parquet (and Excel with
//! the Cargo feature `excel`) with format auto-detection by extension.
//!
//! ## What a summary contains
//!
//! - one [`profile::ColumnProfile`] per column: inferred type
//!   (`empty`/`integer`/`float`/`date`/`boolean`/`categorical`/`text`),
//!   missing/unique counts, and either numeric statistics (with IQR-fence outliers)
//!   or ranked top values
//! - notable Pearson correlations among the leading numeric columns (`|r| > 0.3`)
//! - deterministic [`profile::Insight`]s: dataset shape, worst missing column,
//!   outlier totals, strong correlations, high-cardinality columns
//!
//! ## Quick example: profile a dataset
//!
//! ```rust
//! use rust_data_profiling::profile::{summarize, ColumnType};
//! use rust_data_profiling::types::{Dataset, Scalar};
//!
//! let ds = Dataset::new(
//!     vec!["a".to_string(), "b".to_string()],
//!     vec![
//!         vec![Scalar::from(1i64), Scalar::from("x")],
//!         vec![Scalar::from(2i64), Scalar::from("y")],
//!         vec![Scalar::from(3i64), Scalar::from("x")],
//!     ],
//! );
//!
//! let summary = summarize(&ds);
//! assert_eq!(summary.columns[0].column_type, ColumnType::Integer);
//! assert_eq!(summary.columns[0].stats.as_ref().unwrap().median, 2.0);
//! assert_eq!(summary.columns[1].top_values.as_ref().unwrap()[0].value, "x");
//! ```
//!
//! ## Ingest, then profile
//!
//! ```no_run
//! use rust_data_profiling::ingestion::{ingest_from_path, IngestionOptions};
//! use rust_data_profiling::profile::summarize;
//! use rust_data_profiling::prompt::dataset_context;
//!
//! # fn main() -> Result<(), rust_data_profiling::IngestionError> {
//! // Auto-detects by extension (.csv/.json/.parquet/.xlsx/...).
//! let ds = ingest_from_path("sales.csv", &IngestionOptions::default())?;
//! let summary = summarize(&ds);
//!
//! // The block handed to the LLM prompt builder alongside the user's question.
//! let context = dataset_context(&ds, &summary);
//! println!("{context}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: scalar + dataset types and the scalar coercion rules
//! - [`profile`]: type inference, statistics, outliers, correlations, insights
//! - [`processing`]: in-memory dataset utilities (aggregate/filter/top-n)
//! - [`ingestion`]: schema-less file ingestion with observability hooks
//! - [`prompt`]: prompt-context rendering for the LLM collaborator
//! - [`chart`]: chart specifications parsed from model replies
//! - [`error`]: error types used across ingestion
//!
//! ## Coercion policy
//!
//! Scalar coercion is centralized in [`types::Scalar`]: numbers and numeric strings
//! coerce into arithmetic contexts, everything else does not. Statistics drop
//! values that fail to coerce; ranking treats them as `0`
//! ([`processing::top_n`]); equality and grouping use string forms. Each operation
//! documents which policy it follows.

pub mod chart;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod profile;
pub mod prompt;
pub mod types;

pub use error::{IngestionError, IngestionResult};
