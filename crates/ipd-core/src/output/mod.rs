//! Output generation: statistics and report files

pub mod report;
pub mod stats;

pub use report::{write_history_jsonl, write_report, write_snapshot, ReportError};
pub use stats::{mean, median};
