//! Simulation systems: game resolution, generation runs and strategy evolution.

pub mod evolution;
pub mod game;
pub mod generation;

pub use evolution::{best_neighbor_strategy, evolve_strategies, next_strategies, EvolutionOutcome};
pub use game::{payoffs, resolve_iterated_match, resolve_round};
pub use generation::{GenerationRunner, PairingMode};
