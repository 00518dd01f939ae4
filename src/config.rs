//! Simulation settings.

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::log5::LeagueAverage;
use crate::mc::DEFAULT_TRIALS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of simulated plate appearances.
    pub trials: u64,

    /// League batting average used as the Log5 baseline.
    pub league_average: f64,

    /// Seed for the random source. A clock-derived seed is used when absent.
    pub seed: Option<u64>,

    /// When present, trials are split into shards of this size and run in parallel.
    pub shard_trials: Option<u64>,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        const MIN_TRIALS: u64 = 1;
        if self.trials < MIN_TRIALS {
            bail!("number of trials cannot be fewer than {MIN_TRIALS}");
        }
        LeagueAverage::new(self.league_average)?;
        if self.shard_trials == Some(0) {
            bail!("shard size must be positive");
        }
        Ok(())
    }

    pub fn league_average(&self) -> Result<LeagueAverage, anyhow::Error> {
        Ok(LeagueAverage::new(self.league_average)?)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            league_average: LeagueAverage::DEFAULT.value(),
            seed: None,
            shard_trials: None,
        }
    }
}
