//! Experiment Driver
//!
//! Builds independent societies, runs each for a fixed number of generations
//! and aggregates their final measurements.
//!
//! Society `k` is seeded with `seed + k`, so the report is identical whether
//! societies are evaluated in parallel or one after another.

use ipd_events::{
    generate_run_id, generate_society_id, ExperimentReport, ExperimentSummary, ParameterEcho,
    SocietyReport,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::SimError;
use crate::output::stats::{mean, median};
use crate::society::Society;

#[derive(Debug, Clone)]
pub struct Experiment {
    config: Config,
    parallel: bool,
    keep_history: bool,
}

impl Experiment {
    /// Validates the configuration up front; nothing runs on error.
    pub fn new(config: Config) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            config,
            parallel: true,
            keep_history: true,
        })
    }

    /// Evaluate societies across threads (the default) or one at a time.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Include per-generation history in each society report (the default).
    pub fn with_history(mut self, keep_history: bool) -> Self {
        self.keep_history = keep_history;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn parameters(&self) -> ParameterEcho {
        let engine = &self.config.engine;
        let experiment = &self.config.experiment;
        ParameterEcho {
            ratio_ad: engine.ratio_ad,
            number_of_games: engine.number_of_games,
            connection_probability: engine.connection_probability,
            pairing: engine.pairing.as_str().to_string(),
            society_size: experiment.society_size,
            number_of_generations: experiment.number_of_generations,
            number_of_societies: experiment.number_of_societies,
            seed: experiment.seed,
        }
    }

    /// Builds the society at `index` in its pre-trial state.
    pub fn build_society(&self, index: usize) -> Result<Society, SimError> {
        let experiment = &self.config.experiment;
        let mut rng = SmallRng::seed_from_u64(experiment.society_seed(index));
        Society::new(experiment.society_size, &self.config.engine, &mut rng)
    }

    /// Builds and runs the society at `index`.
    pub fn run_society(&self, index: usize) -> Result<SocietyReport, SimError> {
        let experiment = &self.config.experiment;
        let seed = experiment.society_seed(index);

        let mut society = self.build_society(index)?;
        let initial = society.current_record();
        let records = society.run_generations(experiment.number_of_generations);

        let society_id = generate_society_id(index);
        let contentness_ratio = match society.contentness_ratio() {
            Ok(ratio) => Some(ratio),
            Err(e) => {
                warn!(society = %society_id, "{}", e);
                None
            }
        };

        let history = if self.keep_history {
            std::iter::once(initial).chain(records).collect()
        } else {
            Vec::new()
        };

        Ok(SocietyReport {
            society_id,
            index,
            seed,
            population: society.population_size(),
            edge_count: society.network().edge_count(),
            trust_count: society.trust_count(),
            trust_ratio: society.trust_ratio(),
            total_content: society.total_content(),
            total_discontent: society.total_discontent(),
            contentness_ratio,
            history,
        })
    }

    /// Runs every society and aggregates the results.
    pub fn run(&self) -> Result<ExperimentReport, SimError> {
        let count = self.config.experiment.number_of_societies;
        info!(
            societies = count,
            society_size = self.config.experiment.society_size,
            generations = self.config.experiment.number_of_generations,
            parallel = self.parallel,
            "starting experiment"
        );

        let societies: Vec<SocietyReport> = if self.parallel {
            (0..count)
                .into_par_iter()
                .map(|index| self.run_society(index))
                .collect::<Result<_, _>>()?
        } else {
            (0..count)
                .map(|index| self.run_society(index))
                .collect::<Result<_, _>>()?
        };

        let summary = summarize(&societies)?;
        info!(
            trust_mean = summary.trust_ratio_mean,
            trust_median = summary.trust_ratio_median,
            undefined_contentness = summary.undefined_contentness,
            "experiment complete"
        );

        Ok(ExperimentReport {
            run_id: generate_run_id(),
            parameters: self.parameters(),
            societies,
            summary,
        })
    }
}

/// Mean and median of trust ratio and of contentness ratio across societies.
///
/// Societies with an undefined contentness ratio are counted, not averaged.
pub fn summarize(societies: &[SocietyReport]) -> Result<ExperimentSummary, SimError> {
    let trust: Vec<f64> = societies.iter().map(|s| s.trust_ratio).collect();
    let contentness: Vec<f64> = societies.iter().filter_map(|s| s.contentness_ratio).collect();

    let (contentness_ratio_mean, contentness_ratio_median) = if contentness.is_empty() {
        (None, None)
    } else {
        (Some(mean(&contentness)?), Some(median(&contentness)?))
    };

    Ok(ExperimentSummary {
        societies: societies.len(),
        trust_ratio_mean: mean(&trust)?,
        trust_ratio_median: median(&trust)?,
        contentness_ratio_mean,
        contentness_ratio_median,
        undefined_contentness: societies.len() - contentness.len(),
    })
}
