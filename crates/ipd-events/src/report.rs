//! Report Types
//!
//! Per-society results and the aggregate summary of a multi-society experiment.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::GenerationRecord;

/// Generates a fresh experiment run ID.
pub fn generate_run_id() -> Uuid {
    Uuid::new_v4()
}

/// Parameters an experiment was run with, echoed into its report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterEcho {
    pub ratio_ad: f64,
    pub number_of_games: u32,
    pub connection_probability: f64,
    pub pairing: String,
    pub society_size: usize,
    pub number_of_generations: u64,
    pub number_of_societies: usize,
    pub seed: u64,
}

/// Final measurements of one society
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocietyReport {
    pub society_id: String,
    pub index: usize,
    pub seed: u64,
    pub population: usize,
    pub edge_count: usize,
    pub trust_count: usize,
    pub trust_ratio: f64,
    pub total_content: u64,
    pub total_discontent: u64,
    /// `None` when no agent ever switched to always-defect
    pub contentness_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<GenerationRecord>,
}

/// Mean and median across all societies of an experiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    pub societies: usize,
    pub trust_ratio_mean: f64,
    pub trust_ratio_median: f64,
    /// `None` when no society had a defined contentness ratio
    pub contentness_ratio_mean: Option<f64>,
    pub contentness_ratio_median: Option<f64>,
    /// Societies excluded from the contentness statistics
    pub undefined_contentness: usize,
}

/// Everything produced by one experiment run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub run_id: Uuid,
    pub parameters: ParameterEcho,
    pub societies: Vec<SocietyReport>,
    pub summary: ExperimentSummary,
}

impl ExperimentReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo() -> ParameterEcho {
        ParameterEcho {
            ratio_ad: 0.8,
            number_of_games: 10,
            connection_probability: 0.02,
            pairing: "network".to_string(),
            society_size: 100,
            number_of_generations: 10,
            number_of_societies: 1,
            seed: 42,
        }
    }

    #[test]
    fn test_run_ids_are_unique() {
        assert_ne!(generate_run_id(), generate_run_id());
    }

    #[test]
    fn test_undefined_contentness_serializes_as_null() {
        let society = SocietyReport {
            society_id: "society_0000".to_string(),
            index: 0,
            seed: 42,
            population: 100,
            edge_count: 99,
            trust_count: 20,
            trust_ratio: 0.2,
            total_content: 3,
            total_discontent: 0,
            contentness_ratio: None,
            history: Vec::new(),
        };

        let json = serde_json::to_string(&society).unwrap();
        assert!(json.contains("\"contentness_ratio\":null"));
        // Empty history is omitted
        assert!(!json.contains("history"));
    }

    #[test]
    fn test_experiment_report_json() {
        let report = ExperimentReport {
            run_id: generate_run_id(),
            parameters: echo(),
            societies: Vec::new(),
            summary: ExperimentSummary {
                societies: 0,
                trust_ratio_mean: 0.0,
                trust_ratio_median: 0.0,
                contentness_ratio_mean: None,
                contentness_ratio_median: None,
                undefined_contentness: 0,
            },
        };

        let json = report.to_json().unwrap();
        assert!(json.contains("\"pairing\": \"network\""));

        let parsed = ExperimentReport::from_json(&json).unwrap();
        assert_eq!(parsed.run_id, report.run_id);
        assert_eq!(parsed.parameters, echo());
    }
}
