//! Agent Spawning
//!
//! Builds a population whose strategies are drawn independently per agent.

use rand::rngs::SmallRng;

use crate::components::agent::Agent;
use crate::error::{check_positive, check_probability, SimError};

/// Spawns `count` agents in index order, each always-defect with
/// probability `ratio_ad`.
pub fn spawn_agents(count: usize, ratio_ad: f64, rng: &mut SmallRng) -> Result<Vec<Agent>, SimError> {
    check_positive("society_size", count as u64)?;
    check_probability("ratio_ad", ratio_ad)?;

    Ok((0..count).map(|_| Agent::random(ratio_ad, rng)).collect())
}

/// Summary of spawned agents for reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnSummary {
    pub total_agents: usize,
    pub trusting: usize,
    pub defecting: usize,
}

impl SpawnSummary {
    pub fn of(agents: &[Agent]) -> Self {
        let trusting = agents.iter().filter(|a| a.is_trusting()).count();
        Self {
            total_agents: agents.len(),
            trusting,
            defecting: agents.len() - trusting,
        }
    }
}
