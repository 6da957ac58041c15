//! Run summaries and serialization

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::Generation;

/// How generation 0 was produced
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedKind {
    FromFile,
    Random,
}

/// Statistics for one seeded phase
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseSummary {
    pub seed_kind: SeedKind,
    pub dimension: usize,
    pub generations: Generation,
    pub initial_population: usize,
    pub final_population: usize,
    /// Rows missing from the pattern source and loaded as dead
    pub rows_zero_filled: usize,
}

/// Complete output of a host run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub phases: Vec<PhaseSummary>,
    pub pi_estimate: Option<f64>,
    pub rng_seed: Option<u64>,
    pub simulation_time_ms: u64,
}

impl RunSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable report
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Life Run Summary ===\n");
        if let Some(pi) = self.pi_estimate {
            out.push_str(&format!("Pi estimate: {:.6}\n", pi));
        }
        for phase in &self.phases {
            out.push_str(&format!(
                "{:?}: {}x{} board, {} generations, population {} -> {}\n",
                phase.seed_kind,
                phase.dimension,
                phase.dimension,
                phase.generations,
                phase.initial_population,
                phase.final_population,
            ));
            if phase.rows_zero_filled > 0 {
                out.push_str(&format!(
                    "  ({} rows missing from pattern, loaded as dead)\n",
                    phase.rows_zero_filled
                ));
            }
        }
        out.push_str(&format!("Time: {}ms\n", self.simulation_time_ms));
        out
    }
}
