//! Agent Components
//!
//! An individual player: its strategy, the payoff it accumulates within a
//! generation, its one-round memory and its lifetime strategy-change counters.

use rand::rngs::SmallRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One move in a round of the Prisoner's Dilemma
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    Cooperate,
    Defect,
}

/// The two strategies an agent can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Defects every round regardless of history
    AlwaysDefect,
    /// Cooperates first, then repeats the opponent's previous move
    TitForTat,
}

impl Strategy {
    /// Draws a strategy: always-defect with probability `ratio_ad`.
    ///
    /// `ratio_ad` must already be validated to lie in `[0, 1]`.
    pub fn draw(ratio_ad: f64, rng: &mut SmallRng) -> Self {
        if rng.gen_bool(ratio_ad) {
            Strategy::AlwaysDefect
        } else {
            Strategy::TitForTat
        }
    }

    /// The move this strategy intends before it has seen an opponent.
    pub fn opening_move(self) -> Move {
        match self {
            Strategy::AlwaysDefect => Move::Defect,
            Strategy::TitForTat => Move::Cooperate,
        }
    }

    pub fn is_trusting(self) -> bool {
        self == Strategy::TitForTat
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::AlwaysDefect => "always_defect",
            Strategy::TitForTat => "tit_for_tat",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single member of a society
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub(crate) strategy: Strategy,
    /// Points accumulated during the current generation
    pub(crate) payoff: u64,
    /// The opponent's move in the most recently resolved round
    pub(crate) last_move: Move,
    /// Lifetime switches to tit-for-tat
    pub(crate) content: u32,
    /// Lifetime switches to always-defect
    pub(crate) discontent: u32,
}

impl Agent {
    /// Creates an agent with a fixed starting strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            payoff: 0,
            last_move: Move::Cooperate,
            content: 0,
            discontent: 0,
        }
    }

    /// Creates an agent whose strategy is drawn at random.
    pub fn random(ratio_ad: f64, rng: &mut SmallRng) -> Self {
        Self::new(Strategy::draw(ratio_ad, rng))
    }

    /// The move this agent will play in the next round. Pure read.
    pub fn intended_move(&self) -> Move {
        match self.strategy {
            Strategy::AlwaysDefect => Move::Defect,
            Strategy::TitForTat => self.last_move,
        }
    }

    pub fn reset_payoff(&mut self) {
        self.payoff = 0;
    }

    /// Clears round memory so the next match starts fresh.
    pub(crate) fn reset_memory(&mut self) {
        self.last_move = self.strategy.opening_move();
    }

    /// Switches strategy, bumping the content or discontent counter.
    ///
    /// Returns `true` if the strategy actually changed.
    pub(crate) fn adopt(&mut self, strategy: Strategy) -> bool {
        if self.strategy == strategy {
            return false;
        }
        self.strategy = strategy;
        match strategy {
            Strategy::AlwaysDefect => self.discontent += 1,
            Strategy::TitForTat => self.content += 1,
        }
        true
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn payoff(&self) -> u64 {
        self.payoff
    }

    pub fn last_move(&self) -> Move {
        self.last_move
    }

    pub fn content_count(&self) -> u32 {
        self.content
    }

    pub fn discontent_count(&self) -> u32 {
        self.discontent
    }

    pub fn is_trusting(&self) -> bool {
        self.strategy.is_trusting()
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "strategy={} payoff={} discontent={} content={}",
            self.strategy, self.payoff, self.discontent, self.content
        )
    }
}
