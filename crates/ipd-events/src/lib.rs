//! Shared record types and serialization for the evolving-trust simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! The engine produces these records; reporting layers consume them.

pub mod record;
pub mod report;
pub mod snapshot;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

pub use record::GenerationRecord;

pub use report::{
    generate_run_id, ExperimentReport, ExperimentSummary, ParameterEcho, SocietyReport,
};

pub use snapshot::{generate_society_id, AgentSnapshot, SocietySnapshot};
