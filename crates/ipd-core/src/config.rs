//! Configuration System
//!
//! Loads tuning parameters from a TOML file so experiments can be adjusted
//! without recompiling. Every section is optional; missing keys fall back to
//! the defaults below.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::error::{check_positive, check_probability, SimError};
use crate::systems::generation::PairingMode;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Parameters that change how a single society behaves
    #[serde(default)]
    pub engine: EngineConfig,
    /// Parameters of the multi-society experiment
    #[serde(default)]
    pub experiment: ExperimentConfig,
}

/// Engine parameters, immutable once a society is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Probability an agent starts as always-defect
    pub ratio_ad: f64,
    /// Rounds per iterated match
    pub number_of_games: u32,
    /// Probability of a network edge between any two agents
    pub connection_probability: f64,
    /// Which pairs play each other during a generation
    pub pairing: PairingMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ratio_ad: 0.8,
            number_of_games: 10,
            connection_probability: 0.02,
            pairing: PairingMode::Network,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        check_probability("ratio_ad", self.ratio_ad)?;
        check_probability("connection_probability", self.connection_probability)?;
        check_positive("number_of_games", u64::from(self.number_of_games))?;
        Ok(())
    }
}

/// Experiment parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Agents per society
    pub society_size: usize,
    /// Generations run per society
    pub number_of_generations: u64,
    /// Independent societies aggregated
    pub number_of_societies: usize,
    /// Base seed; society `k` uses `seed + k`
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            society_size: 100,
            number_of_generations: 10,
            number_of_societies: 100,
            seed: 42,
        }
    }
}

impl ExperimentConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        check_positive("society_size", self.society_size as u64)?;
        check_positive("number_of_societies", self.number_of_societies as u64)?;
        Ok(())
    }

    /// Seed for the society at `index`.
    pub fn society_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }
}

impl Config {
    /// Loads and validates configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads from the default path, or uses defaults if the file is missing.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_TUNING_PATH).exists() {
            Self::from_file(DEFAULT_TUNING_PATH)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        self.engine.validate()?;
        self.experiment.validate()
    }

    /// Serializes the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] SimError),
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Evolving Trust Configuration

[engine]
ratio_ad = 0.8
number_of_games = 10
connection_probability = 0.02
pairing = "network"

[experiment]
society_size = 100
number_of_generations = 10
number_of_societies = 100
seed = 42
"#
    .to_string()
}
