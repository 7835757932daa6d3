//! Strategy Evolution
//!
//! After a generation's payoffs are final, every agent imitates the strategy of
//! its best-scoring network neighbor. All new strategies are computed from the
//! same pre-update snapshot and then applied together.

use tracing::trace;

use crate::components::agent::{Agent, Strategy};
use crate::components::network::Network;

/// What one evolution pass changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvolutionOutcome {
    /// Agents whose strategy changed
    pub changed: usize,
    /// Changes toward tit-for-tat
    pub content: usize,
    /// Changes toward always-defect
    pub discontent: usize,
}

/// Strategy agent `index` would adopt, read from the current state.
///
/// Neighbors are scanned in ascending index order; the first one with the
/// strictly highest payoff above zero wins. The agent's own payoff is not part
/// of the comparison. With no neighbor above zero the current strategy stays.
pub fn best_neighbor_strategy(agents: &[Agent], network: &Network, index: usize) -> Strategy {
    let mut best_payoff = 0;
    let mut best_strategy = agents[index].strategy();

    for neighbor in network.neighbors(index) {
        let candidate = &agents[neighbor];
        if candidate.payoff() > best_payoff {
            best_payoff = candidate.payoff();
            best_strategy = candidate.strategy();
        }
    }
    best_strategy
}

/// Computes every agent's next strategy without mutating anything.
pub fn next_strategies(agents: &[Agent], network: &Network) -> Vec<Strategy> {
    (0..agents.len())
        .map(|i| best_neighbor_strategy(agents, network, i))
        .collect()
}

/// Runs one simultaneous evolution pass.
pub fn evolve_strategies(agents: &mut [Agent], network: &Network) -> EvolutionOutcome {
    let next = next_strategies(agents, network);

    let mut outcome = EvolutionOutcome::default();
    for (index, (agent, strategy)) in agents.iter_mut().zip(next).enumerate() {
        let previous = agent.strategy();
        if agent.adopt(strategy) {
            trace!(agent = index, from = %previous, to = %strategy, "strategy changed");
            outcome.changed += 1;
            match strategy {
                Strategy::TitForTat => outcome.content += 1,
                Strategy::AlwaysDefect => outcome.discontent += 1,
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(strategy: Strategy, payoff: u64) -> Agent {
        let mut agent = Agent::new(strategy);
        agent.payoff = payoff;
        agent
    }

    fn line(n: usize) -> Network {
        let mut network = Network::empty(n);
        for i in 1..n {
            network.connect(i - 1, i);
        }
        network
    }

    #[test]
    fn test_adopts_best_neighbor() {
        let agents = vec![
            agent(Strategy::TitForTat, 4),
            agent(Strategy::TitForTat, 9),
            agent(Strategy::AlwaysDefect, 12),
        ];
        let network = line(3);

        assert_eq!(
            best_neighbor_strategy(&agents, &network, 0),
            Strategy::TitForTat
        );
        assert_eq!(
            best_neighbor_strategy(&agents, &network, 1),
            Strategy::AlwaysDefect
        );
        assert_eq!(
            best_neighbor_strategy(&agents, &network, 2),
            Strategy::TitForTat
        );
    }

    #[test]
    fn test_own_payoff_not_compared() {
        // Agent 0 outscores its only neighbor but still imitates it
        let agents = vec![
            agent(Strategy::AlwaysDefect, 100),
            agent(Strategy::TitForTat, 1),
        ];
        let network = line(2);

        assert_eq!(
            best_neighbor_strategy(&agents, &network, 0),
            Strategy::TitForTat
        );
    }

    #[test]
    fn test_zero_payoff_neighbors_do_not_qualify() {
        let agents = vec![
            agent(Strategy::TitForTat, 0),
            agent(Strategy::AlwaysDefect, 0),
            agent(Strategy::TitForTat, 0),
        ];
        let network = line(3);

        assert_eq!(
            next_strategies(&agents, &network),
            vec![
                Strategy::TitForTat,
                Strategy::AlwaysDefect,
                Strategy::TitForTat,
            ]
        );
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let mut network = Network::empty(3);
        network.connect(0, 1);
        network.connect(0, 2);
        let agents = vec![
            agent(Strategy::TitForTat, 1),
            agent(Strategy::AlwaysDefect, 5),
            agent(Strategy::TitForTat, 5),
        ];

        assert_eq!(
            best_neighbor_strategy(&agents, &network, 0),
            Strategy::AlwaysDefect
        );
    }

    #[test]
    fn test_update_is_simultaneous() {
        // Sequential updating would let agent 1 copy agent 0's new strategy
        let agents = vec![
            agent(Strategy::AlwaysDefect, 3),
            agent(Strategy::TitForTat, 2),
            agent(Strategy::TitForTat, 1),
        ];
        let network = line(3);
        let mut updated = agents.clone();

        let outcome = evolve_strategies(&mut updated, &network);

        assert_eq!(updated[0].strategy(), Strategy::TitForTat);
        assert_eq!(updated[1].strategy(), Strategy::AlwaysDefect);
        assert_eq!(updated[2].strategy(), Strategy::TitForTat);
        assert_eq!(
            outcome,
            EvolutionOutcome {
                changed: 2,
                content: 1,
                discontent: 1,
            }
        );
        assert_eq!(updated[0].content_count(), 1);
        assert_eq!(updated[1].discontent_count(), 1);
        assert_eq!(updated[2].content_count(), 0);
    }

    #[test]
    fn test_deterministic_on_same_snapshot() {
        let agents: Vec<Agent> = (0..12u32)
            .map(|i| {
                let strategy = if i % 3 == 0 {
                    Strategy::AlwaysDefect
                } else {
                    Strategy::TitForTat
                };
                agent(strategy, u64::from((i * 7) % 5))
            })
            .collect();
        let mut network = Network::empty(12);
        for i in 0..12 {
            network.connect(i, (i + 5) % 12);
            network.connect(i, (i + 2) % 12);
        }

        assert_eq!(
            next_strategies(&agents, &network),
            next_strategies(&agents, &network)
        );
    }

    #[test]
    fn test_no_edges_changes_nothing() {
        let mut agents = vec![
            agent(Strategy::AlwaysDefect, 10),
            agent(Strategy::TitForTat, 3),
        ];
        let before = agents.clone();

        let outcome = evolve_strategies(&mut agents, &Network::empty(2));

        assert_eq!(outcome, EvolutionOutcome::default());
        assert_eq!(agents, before);
    }
}
