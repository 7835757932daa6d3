//! Society setup: random agent populations and their social network.

pub mod agents;

pub use agents::{spawn_agents, SpawnSummary};
