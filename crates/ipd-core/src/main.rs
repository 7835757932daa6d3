//! Evolving Trust Simulation
//!
//! Runs many independent societies of Iterated Prisoner's Dilemma players and
//! reports how much trust survives.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ipd_core::config::default_config_toml;
use ipd_core::output::{write_history_jsonl, write_report, write_snapshot};
use ipd_core::setup::SpawnSummary;
use ipd_core::{Config, Experiment, PairingMode, Society};
use ipd_events::{generate_society_id, ExperimentReport};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "evolving_trust")]
#[command(about = "Evolution of cooperation in the Iterated Prisoner's Dilemma")]
struct Args {
    /// Tuning file (defaults to tuning.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base random seed; society k uses seed + k
    #[arg(long)]
    seed: Option<u64>,

    /// Probability an agent starts as always-defect
    #[arg(long)]
    ratio_ad: Option<f64>,

    /// Rounds per iterated match
    #[arg(long)]
    games: Option<u32>,

    /// Probability of a network edge between any two agents
    #[arg(long)]
    connection_probability: Option<f64>,

    /// Agents per society
    #[arg(long)]
    society_size: Option<usize>,

    /// Generations per society
    #[arg(long)]
    generations: Option<u64>,

    /// Number of independent societies
    #[arg(long)]
    societies: Option<usize>,

    /// Which pairs play each generation
    #[arg(long, value_enum)]
    pairing: Option<PairingMode>,

    /// Write the full JSON report here
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the first society's generation history here as JSONL
    #[arg(long)]
    history_output: Option<PathBuf>,

    /// Write the first society's final per-agent state here as JSON
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Print the first society's final per-agent state
    #[arg(long)]
    dump: bool,

    /// Print the first society's generation-by-generation progress
    #[arg(long)]
    history: bool,

    /// Evaluate societies one at a time
    #[arg(long)]
    sequential: bool,

    /// Print the default tuning file and exit
    #[arg(long)]
    print_default_config: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.experiment.seed = seed;
        }
        if let Some(ratio_ad) = self.ratio_ad {
            config.engine.ratio_ad = ratio_ad;
        }
        if let Some(games) = self.games {
            config.engine.number_of_games = games;
        }
        if let Some(p) = self.connection_probability {
            config.engine.connection_probability = p;
        }
        if let Some(size) = self.society_size {
            config.experiment.society_size = size;
        }
        if let Some(generations) = self.generations {
            config.experiment.number_of_generations = generations;
        }
        if let Some(societies) = self.societies {
            config.experiment.number_of_societies = societies;
        }
        if let Some(pairing) = self.pairing {
            config.engine.pairing = pairing;
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", default_config_toml());
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_or_default()?,
    };
    args.apply_overrides(&mut config);

    let experiment = Experiment::new(config)?.with_parallel(!args.sequential);

    let first = experiment.build_society(0)?;
    print_header(&experiment, &SpawnSummary::of(first.agents()));

    let report = experiment.run()?;

    if args.history {
        print_history(&report);
    }
    print_societies(&report);
    print_summary(&report);

    if let Some(path) = &args.history_output {
        match report.societies.first() {
            Some(society) => {
                write_history_jsonl(&society.history, path)?;
                println!("Wrote history to {}", path.display());
            }
            None => eprintln!("Warning: no society history to write"),
        }
    }
    if let Some(path) = &args.output {
        write_report(&report, path)?;
        println!("Wrote report to {}", path.display());
    }

    if args.dump || args.snapshot.is_some() {
        // Replays society 0 from its seed; identical to the reported run
        let mut first = first;
        first.run_generations(experiment.config().experiment.number_of_generations);
        if args.dump {
            print!("{}", first);
        }
        if let Some(path) = &args.snapshot {
            write_final_snapshot(&first, path)?;
        }
    }

    Ok(())
}

fn write_final_snapshot(
    society: &Society,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = society.snapshot(generate_society_id(0));
    write_snapshot(&snapshot, path)?;
    println!(
        "Wrote snapshot of {} to {} (trust {}/{})",
        snapshot.society_id,
        path.display(),
        snapshot.trust_count(),
        snapshot.agents.len()
    );
    Ok(())
}

fn print_header(experiment: &Experiment, spawned: &SpawnSummary) {
    let engine = &experiment.config().engine;
    let settings = &experiment.config().experiment;

    println!("Evolving Trust Simulation");
    println!("=========================");
    println!("Seed: {}", settings.seed);
    println!("Societies: {}", settings.number_of_societies);
    println!("Society size: {}", settings.society_size);
    println!("Generations: {}", settings.number_of_generations);
    println!("Ratio always-defect: {}", engine.ratio_ad);
    println!("Games per match: {}", engine.number_of_games);
    println!("Connection probability: {}", engine.connection_probability);
    println!("Pairing: {}", engine.pairing);
    println!(
        "Spawned {} agents in society 0: {} trusting, {} defecting",
        spawned.total_agents, spawned.trusting, spawned.defecting
    );
    println!();
}

fn print_history(report: &ExperimentReport) {
    let Some(first) = report.societies.first() else {
        return;
    };
    println!("History of {}:", first.society_id);
    for record in &first.history {
        let label = if record.generation == 0 {
            "Pre trial".to_string()
        } else {
            format!("Generation {:>4}", record.generation)
        };
        let fraction = record.trust_fraction().unwrap_or(0.0);
        println!(
            "  {} Trust({}/{} = {:.3}) Content({}) Discontent({})",
            label,
            record.trust_count,
            record.population,
            fraction,
            record.total_content,
            record.total_discontent
        );
    }
    println!();
}

fn print_societies(report: &ExperimentReport) {
    for society in &report.societies {
        let contentness = society
            .contentness_ratio
            .map_or_else(|| "undefined".to_string(), |r| format!("{:.3}", r));
        println!(
            "[{}] trust {:.3} ({}/{}) content {} discontent {} contentness {}",
            society.society_id,
            society.trust_ratio,
            society.trust_count,
            society.population,
            society.total_content,
            society.total_discontent,
            contentness
        );
    }
    println!();
}

fn print_summary(report: &ExperimentReport) {
    let summary = &report.summary;
    let optional = |v: Option<f64>| v.map_or_else(|| "undefined".to_string(), |r| format!("{:.4}", r));

    println!("Summary (run {})", report.run_id);
    println!("  Trust ratio mean:         {:.4}", summary.trust_ratio_mean);
    println!("  Trust ratio median:       {:.4}", summary.trust_ratio_median);
    println!("  Contentness ratio mean:   {}", optional(summary.contentness_ratio_mean));
    println!("  Contentness ratio median: {}", optional(summary.contentness_ratio_median));
    if summary.undefined_contentness > 0 {
        println!(
            "  {} of {} societies had no discontent; their contentness ratio is undefined",
            summary.undefined_contentness, summary.societies
        );
    }
}
