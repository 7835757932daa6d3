//! End-to-end scenarios through the public API.

use ipd_core::output::write_report;
use ipd_core::{
    Agent, Config, EngineConfig, Experiment, GenerationRunner, Network, PairingMode, SimError,
    Society, Strategy,
};
use ipd_events::ExperimentReport;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn society(strategies: &[Strategy], network: Network, games: u32, mode: PairingMode) -> Society {
    let agents = strategies.iter().copied().map(Agent::new).collect();
    Society::from_parts(agents, network, GenerationRunner::new(games, mode).unwrap()).unwrap()
}

#[test]
fn test_two_trusting_agents_all_pairs() {
    let mut s = society(
        &[Strategy::TitForTat, Strategy::TitForTat],
        Network::empty(2),
        5,
        PairingMode::AllPairs,
    );

    s.run_generations(1);

    assert_eq!(s.agents()[0].payoff(), 10);
    assert_eq!(s.agents()[1].payoff(), 10);
    assert_eq!(s.trust_count(), 2);
    assert_eq!(s.trust_ratio(), 1.0);
}

#[test]
fn test_defector_exploits_tit_for_tat_once() {
    let mut s = society(
        &[Strategy::AlwaysDefect, Strategy::TitForTat],
        Network::empty(2),
        3,
        PairingMode::AllPairs,
    );

    s.run_generations(1);

    assert_eq!(s.agents()[1].payoff(), 2);
    assert_eq!(s.agents()[0].payoff(), 5);
}

#[test]
fn test_trusting_cluster_converts_defector() {
    // A star: defector in the middle, three trusting agents connected to each other
    let mut network = Network::empty(4);
    for leaf in 1..4 {
        network.connect(0, leaf);
    }
    network.connect(1, 2);
    network.connect(2, 3);
    network.connect(1, 3);
    let mut s = society(
        &[
            Strategy::AlwaysDefect,
            Strategy::TitForTat,
            Strategy::TitForTat,
            Strategy::TitForTat,
        ],
        network,
        10,
        PairingMode::Network,
    );

    let record = s.run_generation();

    // Defector: 3 matches of 3 + 9*1 = 36. Each leaf: 9 against the hub + 2*20 = 49
    assert_eq!(s.agents()[0].payoff(), 36);
    assert_eq!(s.agents()[1].payoff(), 49);
    assert_eq!(s.agents()[0].strategy(), Strategy::TitForTat);
    assert_eq!(s.trust_count(), 4);
    assert_eq!(record.total_content, 1);
    assert_eq!(record.total_discontent, 0);
    assert!(matches!(
        s.contentness_ratio(),
        Err(SimError::DivisionUndefined { .. })
    ));
}

#[test]
fn test_zero_connection_probability_freezes_strategies() {
    let engine = EngineConfig {
        connection_probability: 0.0,
        ..EngineConfig::default()
    };
    let mut s = Society::new(100, &engine, &mut SmallRng::seed_from_u64(42)).unwrap();
    let before = s.trust_count();

    let history = s.run_generations(10);

    assert_eq!(s.network().edge_count(), 0);
    assert_eq!(s.trust_count(), before);
    assert!(history.iter().all(|r| r.matches_played == 0));
    assert_eq!(s.total_content() + s.total_discontent(), 0);
}

#[test]
fn test_experiment_report_written_and_reloaded() {
    let mut config = Config::default();
    config.experiment.society_size = 25;
    config.experiment.number_of_societies = 3;
    config.experiment.number_of_generations = 4;

    let report = Experiment::new(config).unwrap().run().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/report.json");
    write_report(&report, &path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let reloaded = ExperimentReport::from_json(&json).unwrap();
    assert_eq!(reloaded.run_id, report.run_id);
    assert_eq!(reloaded.societies.len(), 3);
    assert_eq!(reloaded.summary.societies, 3);
    assert!((reloaded.summary.trust_ratio_mean - report.summary.trust_ratio_mean).abs() < 1e-12);
    assert_eq!(reloaded.societies[2].history, report.societies[2].history);
}
