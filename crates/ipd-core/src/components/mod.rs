//! Component definitions for the simulation

pub mod agent;
pub mod network;

pub use agent::{Agent, Move, Strategy};
pub use network::Network;
