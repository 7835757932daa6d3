//! Generation Records
//!
//! One record per generation, capturing the population-level measurements
//! taken after strategy evolution has been applied.

use serde::{Deserialize, Serialize};

/// Population-level measurements at the end of one generation.
///
/// Generation `0` is the pre-trial state of a freshly built society.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation: u64,
    /// Agents currently playing tit-for-tat
    pub trust_count: usize,
    pub population: usize,
    /// Lifetime switches toward tit-for-tat, summed over all agents
    pub total_content: u64,
    /// Lifetime switches toward always-defect, summed over all agents
    pub total_discontent: u64,
    /// Iterated matches played during this generation
    #[serde(default)]
    pub matches_played: usize,
    /// Agents whose strategy changed at the end of this generation
    #[serde(default)]
    pub strategy_changes: usize,
}

impl GenerationRecord {
    /// Fraction of the population that trusts, or `None` for an empty population.
    pub fn trust_fraction(&self) -> Option<f64> {
        if self.population == 0 {
            None
        } else {
            Some(self.trust_count as f64 / self.population as f64)
        }
    }

    /// Serialize as a single JSONL line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from a single JSONL line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GenerationRecord {
        GenerationRecord {
            generation: 3,
            trust_count: 25,
            population: 100,
            total_content: 12,
            total_discontent: 4,
            matches_played: 99,
            strategy_changes: 7,
        }
    }

    #[test]
    fn test_trust_fraction() {
        assert_eq!(sample().trust_fraction(), Some(0.25));

        let empty = GenerationRecord {
            population: 0,
            trust_count: 0,
            ..sample()
        };
        assert_eq!(empty.trust_fraction(), None);
    }

    #[test]
    fn test_record_jsonl() {
        let line = sample().to_jsonl().unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("\"trust_count\":25"));

        let parsed = GenerationRecord::from_jsonl(&line).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let line = r#"{"generation":0,"trust_count":3,"population":10,"total_content":0,"total_discontent":0}"#;
        let parsed = GenerationRecord::from_jsonl(line).unwrap();

        assert_eq!(parsed.matches_played, 0);
        assert_eq!(parsed.strategy_changes, 0);
    }
}
