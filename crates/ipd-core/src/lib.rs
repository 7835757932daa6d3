//! Evolving Trust Simulation Engine
//!
//! Agents play the Iterated Prisoner's Dilemma over a random social network
//! and imitate their most successful neighbors, generation after generation.

pub mod components;
pub mod config;
pub mod error;
pub mod experiment;
pub mod output;
pub mod setup;
pub mod society;
pub mod systems;

pub use components::*;
pub use config::{Config, ConfigError, EngineConfig, ExperimentConfig};
pub use error::SimError;
pub use experiment::{summarize, Experiment};
pub use society::Society;
pub use systems::{GenerationRunner, PairingMode};
