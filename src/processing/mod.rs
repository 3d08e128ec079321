//! In-memory dataset transformations.
//!
//! The processing layer operates on [`crate::types::Dataset`] values produced by
//! ingestion (or built in memory). Every function returns a fresh result and leaves
//! its input untouched.
//!
//! Currently implemented:
//!
//! - [`filter()`]: row filtering by a list of AND-combined conditions
//! - [`aggregate()`]: group-by reduction (sum/avg/count/min/max)
//! - [`top_n()`]: ranking by numeric coercion of one column
//!
//! ## Example: filter → aggregate
//!
//! ```rust
//! use rust_data_profiling::processing::{aggregate, filter, AggregateFn, Condition, Operator};
//! use rust_data_profiling::types::{Dataset, Scalar};
//!
//! let ds = Dataset::new(
//!     vec!["region".to_string(), "sales".to_string()],
//!     vec![
//!         vec![Scalar::from("north"), Scalar::from("100")],
//!         vec![Scalar::from("south"), Scalar::from("80")],
//!         vec![Scalar::from("north"), Scalar::from("40")],
//!         vec![Scalar::from("south"), Scalar::from("5")],
//!     ],
//! );
//!
//! // Keep rows with sales >= 40, then total per region.
//! let kept = filter(&ds, &[Condition::new("sales", Operator::Gte, 40i64)]);
//! let totals = aggregate(&kept, "region", "sales", AggregateFn::Sum).unwrap();
//!
//! assert_eq!(totals[0].key, "north");
//! assert_eq!(totals[0].value, 140.0);
//! assert_eq!(totals[1].key, "south");
//! assert_eq!(totals[1].value, 80.0);
//! ```

pub mod aggregate;
pub mod filter;
pub mod rank;

pub use aggregate::{aggregate, AggregateFn, AggregateRow};
pub use filter::{filter, Condition, Operator};
pub use rank::top_n;
