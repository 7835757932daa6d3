//! Sample data fixtures for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // ipd-events = { path = "../ipd-events", features = ["test-fixtures"] }
//!
//! use ipd_events::fixtures;
//!
//! let history = fixtures::sample_history();
//! ```

use crate::GenerationRecord;

/// Returns a sample generation history from the fixtures file.
///
/// Contains 6 records (generation 0 through 5) of a 100-agent society in which
/// trust first spreads and then collapses back toward defection.
pub fn sample_history() -> Vec<GenerationRecord> {
    let jsonl = include_str!("../tests/fixtures/sample_history.jsonl");
    jsonl
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            GenerationRecord::from_jsonl(l).unwrap_or_else(|e| {
                panic!("Failed to parse record line: {}\nError: {}", l, e)
            })
        })
        .collect()
}
