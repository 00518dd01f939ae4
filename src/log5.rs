//! The Log5 method: the expected rate of an event in a head-to-head matchup, given each side's
//! individual rate and a league-wide baseline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// League-wide batting average used as the Log5 baseline. Always strictly between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct LeagueAverage(f64);

impl LeagueAverage {
    pub const DEFAULT: LeagueAverage = LeagueAverage(0.270);

    pub fn new(value: f64) -> Result<Self, InvalidLeagueAverage> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(InvalidLeagueAverage(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for LeagueAverage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for LeagueAverage {
    type Error = InvalidLeagueAverage;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LeagueAverage> for f64 {
    fn from(league: LeagueAverage) -> Self {
        league.0
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("league average must lie strictly between 0 and 1, got {0}")]
pub struct InvalidLeagueAverage(pub f64);

/// Combines the batter's rate with the pitcher's allowed rate against the league baseline. Without
/// a pitcher rate, the batter's rate is returned as is.
pub fn combine(batter: f64, pitcher: Option<f64>, league: LeagueAverage) -> f64 {
    let Some(pitcher) = pitcher else {
        return batter;
    };
    let league = league.value();
    let odds = batter * pitcher / league;
    let against = (1.0 - batter) * (1.0 - pitcher) / (1.0 - league);
    let denominator = odds + against;
    if denominator > 0.0 {
        (odds / denominator).clamp(0.0, 1.0)
    } else {
        batter
    }
}
