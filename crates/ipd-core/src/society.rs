//! Society
//!
//! Owns a population of agents and the network over their indices, runs
//! generations and answers population-level measurement queries.

use ipd_events::{AgentSnapshot, GenerationRecord, SocietySnapshot};
use rand::rngs::SmallRng;
use std::fmt;
use tracing::debug;

use crate::components::agent::Agent;
use crate::components::network::Network;
use crate::config::EngineConfig;
use crate::error::{check_positive, SimError};
use crate::setup::spawn_agents;
use crate::systems::evolution::{evolve_strategies, EvolutionOutcome};
use crate::systems::generation::GenerationRunner;

#[derive(Debug, Clone)]
pub struct Society {
    agents: Vec<Agent>,
    network: Network,
    runner: GenerationRunner,
    generation: u64,
}

impl Society {
    /// Builds a random society.
    ///
    /// Strategies are drawn first, in index order, then network edges, all
    /// from `rng`. Nothing is built if any parameter is invalid.
    pub fn new(
        population_size: usize,
        engine: &EngineConfig,
        rng: &mut SmallRng,
    ) -> Result<Self, SimError> {
        engine.validate()?;
        let runner = GenerationRunner::new(engine.number_of_games, engine.pairing)?;
        let agents = spawn_agents(population_size, engine.ratio_ad, rng)?;
        let network = Network::build(population_size, engine.connection_probability, rng)?;
        Self::from_parts(agents, network, runner)
    }

    /// Assembles a society from prepared agents and network.
    pub fn from_parts(
        agents: Vec<Agent>,
        network: Network,
        runner: GenerationRunner,
    ) -> Result<Self, SimError> {
        check_positive("society_size", agents.len() as u64)?;
        if network.len() != agents.len() {
            return Err(SimError::InvalidParameter {
                name: "network",
                reason: format!(
                    "network covers {} agents but the society has {}",
                    network.len(),
                    agents.len()
                ),
            });
        }
        Ok(Self {
            agents,
            network,
            runner,
            generation: 0,
        })
    }

    /// Plays one generation, then evolves strategies if the pairing mode calls for it.
    pub fn run_generation(&mut self) -> GenerationRecord {
        let matches_played = self.runner.run(&mut self.agents, &self.network);
        let outcome = if self.runner.mode().evolves() {
            evolve_strategies(&mut self.agents, &self.network)
        } else {
            EvolutionOutcome::default()
        };
        self.generation += 1;

        let record = self.record(matches_played, outcome.changed);
        debug!(
            generation = record.generation,
            trust = record.trust_count,
            population = record.population,
            content = record.total_content,
            discontent = record.total_discontent,
            matches = matches_played,
            changes = outcome.changed,
            "generation complete"
        );
        record
    }

    /// Runs `n` consecutive generations and returns one record per generation.
    pub fn run_generations(&mut self, n: u64) -> Vec<GenerationRecord> {
        (0..n).map(|_| self.run_generation()).collect()
    }

    /// Measurements of the current state, with no activity counters.
    ///
    /// On a fresh society this is the pre-trial record for generation 0.
    pub fn current_record(&self) -> GenerationRecord {
        self.record(0, 0)
    }

    fn record(&self, matches_played: usize, strategy_changes: usize) -> GenerationRecord {
        GenerationRecord {
            generation: self.generation,
            trust_count: self.trust_count(),
            population: self.population_size(),
            total_content: self.total_content(),
            total_discontent: self.total_discontent(),
            matches_played,
            strategy_changes,
        }
    }

    /// Agents currently playing tit-for-tat.
    pub fn trust_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_trusting()).count()
    }

    pub fn total_content(&self) -> u64 {
        self.agents.iter().map(|a| u64::from(a.content_count())).sum()
    }

    pub fn total_discontent(&self) -> u64 {
        self.agents.iter().map(|a| u64::from(a.discontent_count())).sum()
    }

    pub fn population_size(&self) -> usize {
        self.agents.len()
    }

    /// `trust_count / population_size`. The population is never empty.
    pub fn trust_ratio(&self) -> f64 {
        self.trust_count() as f64 / self.population_size() as f64
    }

    /// `total_content / total_discontent`.
    pub fn contentness_ratio(&self) -> Result<f64, SimError> {
        let discontent = self.total_discontent();
        if discontent == 0 {
            return Err(SimError::DivisionUndefined {
                what: "contentness ratio with zero discontent",
            });
        }
        Ok(self.total_content() as f64 / discontent as f64)
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn runner(&self) -> GenerationRunner {
        self.runner
    }

    /// Generations run so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Per-agent state for output.
    pub fn snapshot(&self, society_id: impl Into<String>) -> SocietySnapshot {
        let mut snapshot = SocietySnapshot::new(society_id, self.generation);
        snapshot.edge_count = self.network.edge_count();
        snapshot.agents = self
            .agents
            .iter()
            .enumerate()
            .map(|(index, agent)| AgentSnapshot {
                payoff: agent.payoff(),
                content: agent.content_count(),
                discontent: agent.discontent_count(),
                degree: self.network.degree(index),
                ..AgentSnapshot::new(index, agent.strategy().as_str())
            })
            .collect();
        snapshot
    }
}

impl fmt::Display for Society {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Society (generation {}) ---", self.generation)?;
        for (index, agent) in self.agents.iter().enumerate() {
            writeln!(f, "agent {:>4}: {}", index, agent)?;
        }
        Ok(())
    }
}
