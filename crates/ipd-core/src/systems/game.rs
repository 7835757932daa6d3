//! Game Resolution
//!
//! One round of the Prisoner's Dilemma between two agents, and iterated
//! matches of consecutive rounds between the same pair.

use crate::components::agent::{Agent, Move};

/// Payoff values of the symmetric game
pub mod payoff {
    /// Cooperated against a cooperator
    pub const REWARD: u32 = 2;
    /// Cooperated against a defector
    pub const SUCKER: u32 = 0;
    /// Defected against a cooperator
    pub const TEMPTATION: u32 = 3;
    /// Defected against a defector
    pub const PUNISHMENT: u32 = 1;
}

/// Payoffs `(a, b)` for one pair of moves.
pub fn payoffs(a: Move, b: Move) -> (u32, u32) {
    match (a, b) {
        (Move::Cooperate, Move::Cooperate) => (payoff::REWARD, payoff::REWARD),
        (Move::Cooperate, Move::Defect) => (payoff::SUCKER, payoff::TEMPTATION),
        (Move::Defect, Move::Cooperate) => (payoff::TEMPTATION, payoff::SUCKER),
        (Move::Defect, Move::Defect) => (payoff::PUNISHMENT, payoff::PUNISHMENT),
    }
}

/// Plays one round and returns the payoff pair.
///
/// Each agent's move is read exactly once. Afterwards each agent remembers the
/// move its opponent just played. Payoffs are not accumulated here.
pub fn resolve_round(a: &mut Agent, b: &mut Agent) -> (u32, u32) {
    let move_a = a.intended_move();
    let move_b = b.intended_move();

    a.last_move = move_b;
    b.last_move = move_a;

    payoffs(move_a, move_b)
}

/// Plays `num_games` rounds between the same pair, accumulating payoffs.
///
/// Both agents' round memory is reset afterwards, so a match never depends on
/// the matches played before it.
pub fn resolve_iterated_match(a: &mut Agent, b: &mut Agent, num_games: u32) {
    for _ in 0..num_games {
        let (payoff_a, payoff_b) = resolve_round(a, b);
        a.payoff += u64::from(payoff_a);
        b.payoff += u64::from(payoff_b);
    }
    a.reset_memory();
    b.reset_memory();
}
