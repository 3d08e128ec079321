//! End-to-end: ingest a file, profile it, and use the summary downstream.

use rust_data_profiling::ingestion::{ingest_from_path, IngestionOptions};
use rust_data_profiling::processing::{aggregate, filter, AggregateFn, Condition, Operator};
use rust_data_profiling::profile::{summarize, ColumnType, InsightKind};
use rust_data_profiling::prompt::dataset_context;
use rust_data_profiling::types::{Dataset, Scalar};

#[test]
fn csv_to_summary_end_to_end() {
    let ds = ingest_from_path("tests/fixtures/people.csv", &IngestionOptions::default()).unwrap();
    let summary = summarize(&ds);

    assert_eq!(summary.total_rows, 3);
    assert_eq!(summary.total_columns, 4);

    let by_name = |name: &str| {
        summary
            .columns
            .iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("missing column {name}"))
    };

    // Raw CSV text classifies by content.
    assert_eq!(by_name("id").column_type, ColumnType::Integer);
    assert_eq!(by_name("score").column_type, ColumnType::Float);
    assert_eq!(by_name("active").column_type, ColumnType::Boolean);

    // "score" has one empty cell.
    assert_eq!(by_name("score").missing_count, 1);

    // First insight is always the shape line; the missing-value warning follows.
    assert_eq!(summary.insights[0].kind, InsightKind::Info);
    assert!(summary.insights[0].message.contains("3 rows"));
    assert_eq!(summary.insights[1].kind, InsightKind::Warning);
    assert!(summary.insights[1].message.contains("'score'"));
}

#[test]
fn numeric_stats_identities_hold_for_every_numeric_column() {
    let ds = ingest_from_path("tests/fixtures/people.csv", &IngestionOptions::default()).unwrap();
    let summary = summarize(&ds);

    for col in &summary.columns {
        if let Some(stats) = &col.stats {
            assert_eq!(stats.range, stats.max - stats.min, "column {}", col.name);
            assert_eq!(stats.iqr, stats.q3 - stats.q1, "column {}", col.name);
        }
    }
}

#[test]
fn summarize_twice_produces_identical_output() {
    let ds = ingest_from_path("tests/fixtures/people.json", &IngestionOptions::default()).unwrap();
    assert_eq!(summarize(&ds), summarize(&ds));
}

#[test]
fn aggregate_reference_scenario() {
    let ds = Dataset::new(
        vec!["g".to_string(), "v".to_string()],
        vec![
            vec![Scalar::from("A"), Scalar::from("10")],
            vec![Scalar::from("A"), Scalar::from("20")],
            vec![Scalar::from("B"), Scalar::from("5")],
        ],
    );
    let out = aggregate(&ds, "g", "v", AggregateFn::Sum).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!((out[0].key.as_str(), out[0].value), ("A", 30.0));
    assert_eq!((out[1].key.as_str(), out[1].value), ("B", 5.0));
}

#[test]
fn filter_keeps_only_rows_passing_every_condition() {
    let ds = Dataset::new(
        vec!["v".to_string()],
        vec![
            vec![Scalar::from("5")],
            vec![Scalar::from("15")],
            vec![Scalar::from("25")],
        ],
    );
    let out = filter(&ds, &[Condition::new("v", Operator::Gt, 10i64)]);
    assert_eq!(out.row_count(), 2);
    assert!(out
        .rows
        .iter()
        .all(|row| row[0].as_number().unwrap() > 10.0));
}

#[test]
fn correlated_columns_produce_summary_entries_and_insights() {
    // y = 3x (r = 1), z is noise-free anticorrelation of x (r = -1).
    let rows: Vec<Vec<Scalar>> = (0..30)
        .map(|i| {
            let x = i as f64;
            vec![
                Scalar::Number(x),
                Scalar::Number(3.0 * x),
                Scalar::Number(100.0 - x),
            ]
        })
        .collect();
    let ds = Dataset::new(
        vec!["x".to_string(), "y".to_string(), "z".to_string()],
        rows,
    );
    let summary = summarize(&ds);

    // All three pairs are perfectly correlated.
    assert_eq!(summary.correlations.len(), 3);
    for corr in &summary.correlations {
        assert!(corr.coefficient.abs() > 0.99);
    }

    let strong: Vec<_> = summary
        .insights
        .iter()
        .filter(|i| i.message.contains("correlation"))
        .collect();
    assert_eq!(strong.len(), 3);
    assert!(strong[0].message.contains("positive"));
}

#[test]
fn prompt_context_reflects_the_summary() {
    let ds = ingest_from_path("tests/fixtures/people.csv", &IngestionOptions::default()).unwrap();
    let summary = summarize(&ds);
    let ctx = dataset_context(&ds, &summary);

    assert!(ctx.contains("Dataset: 3 rows x 4 columns"));
    assert!(ctx.contains("- id (integer)"));
    assert!(ctx.contains("Sample rows (first 5)"));

    // The sample block is parseable JSON with one record per row (3 < 5).
    let json_line = ctx.lines().last().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(json_line).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
}
