//! Generation Runner
//!
//! Resets payoffs, then plays one iterated match for every eligible pair of
//! agents in ascending `(i, j)` order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::agent::Agent;
use crate::components::network::Network;
use crate::error::{check_positive, SimError};
use crate::systems::game::resolve_iterated_match;

/// Which pairs of agents play each other during a generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum PairingMode {
    /// Every unordered pair plays; no strategy evolution follows
    AllPairs,
    /// Only network neighbors play; strategy evolution follows each generation
    #[default]
    Network,
}

impl PairingMode {
    /// Whether strategy evolution runs after a generation in this mode.
    pub fn evolves(self) -> bool {
        matches!(self, PairingMode::Network)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PairingMode::AllPairs => "all_pairs",
            PairingMode::Network => "network",
        }
    }
}

impl fmt::Display for PairingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRunner {
    num_games: u32,
    mode: PairingMode,
}

impl GenerationRunner {
    pub fn new(num_games: u32, mode: PairingMode) -> Result<Self, SimError> {
        check_positive("number_of_games", u64::from(num_games))?;
        Ok(Self { num_games, mode })
    }

    pub fn num_games(&self) -> u32 {
        self.num_games
    }

    pub fn mode(&self) -> PairingMode {
        self.mode
    }

    /// Plays one generation and returns the number of matches played.
    ///
    /// `network` must cover exactly the agents in `agents`.
    pub fn run(&self, agents: &mut [Agent], network: &Network) -> usize {
        debug_assert_eq!(agents.len(), network.len());

        for agent in agents.iter_mut() {
            agent.reset_payoff();
        }

        let mut matches = 0;
        match self.mode {
            PairingMode::AllPairs => {
                let n = agents.len();
                for i in 0..n {
                    for j in (i + 1)..n {
                        self.play(agents, i, j);
                        matches += 1;
                    }
                }
            }
            PairingMode::Network => {
                // Edges come out in the same ascending (i, j) order
                for (i, j) in network.edges() {
                    self.play(agents, i, j);
                    matches += 1;
                }
            }
        }
        matches
    }

    fn play(&self, agents: &mut [Agent], i: usize, j: usize) {
        let (a, b) = pair_mut(agents, i, j);
        resolve_iterated_match(a, b, self.num_games);
    }
}

/// Two distinct mutable borrows, `i < j`.
fn pair_mut(agents: &mut [Agent], i: usize, j: usize) -> (&mut Agent, &mut Agent) {
    debug_assert!(i < j);
    let (head, tail) = agents.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
