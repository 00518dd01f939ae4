//! The transport-independent boundary: a matchup request in, a simulation response out.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tinyrand::{Seeded, Wyrand};
use tracing::debug;

use crate::commentary::commentary;
use crate::config::SimulationConfig;
use crate::mc::MonteCarloEngine;
use crate::outcome::{ByOutcome, OutcomeCategory};
use crate::rates::MatchupRates;
use crate::sampler::TrialProbs;
use crate::stats::{BattingLine, PitchingLine};
use crate::summary::{round_rate, SimulationSummary};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    #[serde(default)]
    pub batter: Option<BattingLine>,

    #[serde(default)]
    pub pitcher: Option<PitchingLine>,
}

impl SimulationRequest {
    pub fn new(batter: BattingLine, pitcher: PitchingLine) -> Self {
        Self {
            batter: Some(batter),
            pitcher: Some(pitcher),
        }
    }

    /// Only absent (or `null`) players are rejected. An empty line is valid and simulates on
    /// default rates.
    pub fn validate(&self) -> Result<(&BattingLine, &PitchingLine), InvalidRequest> {
        let batter = self.batter.as_ref().ok_or(InvalidRequest::MissingBatter)?;
        let pitcher = self.pitcher.as_ref().ok_or(InvalidRequest::MissingPitcher)?;
        Ok((batter, pitcher))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResponse {
    pub result: OutcomeCategory,
    pub text: String,
    pub bases: u8,
    pub statistics: Statistics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_simulations: u64,
    pub distribution: ByOutcome<f64>,
    pub average_bases: f64,
    pub hit_rate: f64,
    pub on_base_rate: f64,
    pub counts: ByOutcome<u64>,
}

impl SimulationResponse {
    pub fn new(summary: &SimulationSummary, batter: Option<&str>, pitcher: Option<&str>) -> Self {
        Self {
            result: summary.modal,
            text: commentary(summary.modal, batter, pitcher),
            bases: summary.modal_bases(),
            statistics: Statistics {
                total_simulations: summary.trials,
                distribution: summary.distribution,
                average_bases: round_rate(summary.average_bases),
                hit_rate: round_rate(summary.hit_rate),
                on_base_rate: round_rate(summary.on_base_rate),
                counts: summary.counts,
            },
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidRequest {
    #[error("batter data is required")]
    MissingBatter,

    #[error("pitcher data is required")]
    MissingPitcher,
}

#[derive(Debug, Error)]
#[error(transparent)]
pub struct InvalidConfig(#[from] anyhow::Error);

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("{0}")]
    InvalidRequest(#[from] InvalidRequest),

    #[error("{0}")]
    InvalidConfig(#[from] InvalidConfig),
}

/// Error body suitable for returning to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

impl From<&SimulationError> for ErrorResponse {
    fn from(err: &SimulationError) -> Self {
        let detail = match err {
            SimulationError::InvalidRequest(_) => "both batter and pitcher data must be supplied",
            SimulationError::InvalidConfig(_) => "the simulation settings are invalid",
        };
        Self {
            error: err.to_string(),
            detail: detail.into(),
        }
    }
}

/// Simulates a plate appearance between the requested batter and pitcher.
pub fn simulate_at_bat(
    request: &SimulationRequest,
    config: &SimulationConfig,
) -> Result<SimulationResponse, SimulationError> {
    let (batter, pitcher) = request.validate()?;
    config.validate().map_err(InvalidConfig::from)?;
    let league = config.league_average().map_err(InvalidConfig::from)?;

    let rates = MatchupRates::estimate(batter, pitcher);
    let engine = MonteCarloEngine::default()
        .with_trials(config.trials)
        .with_probs(TrialProbs::new(&rates, league));

    let seed = config.seed.unwrap_or_else(clock_seed);
    let start_time = Instant::now();
    let tally = match config.shard_trials {
        Some(shard_trials) => engine.simulate_sharded(seed, shard_trials),
        None => engine.simulate(&mut Wyrand::seed(seed)),
    };
    let summary = SimulationSummary::from(&tally);
    debug!(
        "{} trials with seed {seed} took {:.3}s, modal outcome: {}",
        summary.trials,
        start_time.elapsed().as_millis() as f64 / 1_000.,
        summary.modal
    );

    Ok(SimulationResponse::new(
        &summary,
        batter.name.as_deref(),
        pitcher.name.as_deref(),
    ))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
