//! Simulation configuration with documented constants
//!
//! Every value has a default matching the classic host program, so an
//! empty (or absent) TOML file yields a runnable configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{LifeError, Result};

/// Side length of the square board
pub const DEFAULT_DIMENSION: usize = 30;

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Side length N of the N×N board. Fixed for the lifetime of a grid.
    pub dimension: usize,

    /// Number of advances performed after seeding, per phase
    pub generations: u32,

    /// Pause between generations (milliseconds)
    ///
    /// Only the driver sleeps; the automaton itself never blocks.
    /// Zero disables pacing entirely, which is what tests and the
    /// headless runner want.
    pub step_delay_ms: u64,

    /// Glyph printed for live cells
    pub alive_glyph: char,

    /// Glyph printed for dead cells
    pub dead_glyph: char,

    /// Pattern file used by the "from file" phase
    pub pattern_path: Option<PathBuf>,

    /// Seed for the random phase and the π estimator. `None` draws from entropy.
    pub seed: Option<u64>,

    /// Sample count for the Monte Carlo π estimator
    pub pi_samples: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            generations: 6,
            step_delay_ms: 1000,
            alive_glyph: 'x',
            dead_glyph: ' ',
            pattern_path: None,
            seed: None,
            pi_samples: 1_000_000,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimulationConfig =
            toml::from_str(content).map_err(|e| LifeError::Config(format!("Invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LifeError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(LifeError::Config("dimension must be at least 1".into()));
        }

        if self.pi_samples == 0 {
            return Err(LifeError::Config("pi_samples must be positive".into()));
        }

        // Indistinguishable glyphs would make the render meaningless
        if self.alive_glyph == self.dead_glyph {
            return Err(LifeError::Config(format!(
                "alive_glyph and dead_glyph must differ (both {:?})",
                self.alive_glyph
            )));
        }

        Ok(())
    }
}
