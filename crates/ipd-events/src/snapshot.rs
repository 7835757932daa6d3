//! Snapshot Types
//!
//! Serialization structs for the per-agent state of a society at a point in time,
//! used for analysis and debugging.

use serde::{Deserialize, Serialize};

/// Generates a society ID from its index within an experiment.
pub fn generate_society_id(index: usize) -> String {
    format!("society_{:04}", index)
}

/// One agent's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub index: usize,
    /// `always_defect` or `tit_for_tat`
    pub strategy: String,
    pub payoff: u64,
    pub content: u32,
    pub discontent: u32,
    /// Number of network neighbors
    #[serde(default)]
    pub degree: usize,
}

impl AgentSnapshot {
    pub fn new(index: usize, strategy: impl Into<String>) -> Self {
        Self {
            index,
            strategy: strategy.into(),
            payoff: 0,
            content: 0,
            discontent: 0,
            degree: 0,
        }
    }

    pub fn is_trusting(&self) -> bool {
        self.strategy == "tit_for_tat"
    }
}

/// Complete state of one society after some number of generations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocietySnapshot {
    pub society_id: String,
    pub generation: u64,
    pub edge_count: usize,
    #[serde(default)]
    pub agents: Vec<AgentSnapshot>,
}

impl SocietySnapshot {
    pub fn new(society_id: impl Into<String>, generation: u64) -> Self {
        Self {
            society_id: society_id.into(),
            generation,
            edge_count: 0,
            agents: Vec::new(),
        }
    }

    pub fn trust_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_trusting()).count()
    }
}
