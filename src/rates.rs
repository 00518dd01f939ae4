//! Derivation of per-plate-appearance rates from raw counting stats.
//!
//! This is the only place where defaults are substituted for absent or degenerate inputs. Once a
//! [MatchupRates] exists, every downstream stage is total.

use tracing::debug;

use crate::stats::{BattingLine, PitchingLine};

/// Walk rate assumed when there are no plate appearances (or batters faced) to divide by.
pub const DEFAULT_WALK_RATE: f64 = 0.08;

/// Strikeout rate assumed when there are no plate appearances (or batters faced) to divide by.
pub const DEFAULT_STRIKEOUT_RATE: f64 = 0.18;

/// Batting average assumed for a batter with neither a supplied average nor at-bats.
pub const DEFAULT_BATTER_AVERAGE: f64 = 0.280;

/// Hit-type shares of a typical league hitter, used when the batter has no hits on record.
pub const DEFAULT_HIT_TYPES: HitTypeRatios = HitTypeRatios {
    home_run: 0.05,
    triple: 0.01,
    double: 0.15,
};

/// Shares of a batter's hits that went for extra bases. Singles take the residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTypeRatios {
    pub home_run: f64,
    pub triple: f64,
    pub double: f64,
}

impl HitTypeRatios {
    pub fn sum(&self) -> f64 {
        self.home_run + self.triple + self.double
    }

    /// Scales all three shares down proportionally if they sum to more than 1, so that they sum to
    /// exactly 1. Otherwise returns the shares unchanged.
    pub fn normalised(&self) -> Self {
        let sum = self.sum();
        if sum > 1.0 {
            let scale = 1.0 / sum;
            Self {
                home_run: self.home_run * scale,
                triple: self.triple * scale,
                double: self.double * scale,
            }
        } else {
            *self
        }
    }

    pub fn single(&self) -> f64 {
        f64::max(0.0, 1.0 - self.sum())
    }
}

impl Default for HitTypeRatios {
    fn default() -> Self {
        DEFAULT_HIT_TYPES
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatterRates {
    pub walk: f64,
    pub strikeout: f64,
    pub average: f64,
    pub hits: f64,
    pub hit_types: HitTypeRatios,
}

impl BatterRates {
    pub fn estimate(line: &BattingLine) -> Self {
        let at_bats = line.at_bats.unwrap_or(0.0);
        let average = line
            .average
            .or_else(|| (at_bats > 0.0).then(|| line.hits.unwrap_or(0.0) / at_bats))
            .unwrap_or(DEFAULT_BATTER_AVERAGE)
            .clamp(0.0, 1.0);

        let hits = match line.hits {
            Some(hits) if hits > 0.0 => hits,
            _ => at_bats * average,
        };

        let hit_types = if hits > 0.0 {
            HitTypeRatios {
                home_run: line.home_runs.unwrap_or(0.0) / hits,
                triple: line.triples.unwrap_or(0.0) / hits,
                double: line.doubles.unwrap_or(0.0) / hits,
            }
        } else {
            DEFAULT_HIT_TYPES
        };

        Self {
            walk: rate(line.walks, line.plate_appearances, DEFAULT_WALK_RATE),
            strikeout: rate(line.strikeouts, line.plate_appearances, DEFAULT_STRIKEOUT_RATE),
            average,
            hits,
            hit_types,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitcherRates {
    pub walk: f64,
    pub strikeout: f64,
    /// Opponent batting average. When absent, no matchup adjustment is applied to the batter.
    pub average: Option<f64>,
}

impl PitcherRates {
    pub fn estimate(line: &PitchingLine) -> Self {
        Self {
            walk: rate(line.walks, line.batters_faced, DEFAULT_WALK_RATE),
            strikeout: rate(line.strikeouts, line.batters_faced, DEFAULT_STRIKEOUT_RATE),
            average: line.average.map(|average| average.clamp(0.0, 1.0)),
        }
    }
}

/// Rates for both sides of a matchup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchupRates {
    pub batter: BatterRates,
    pub pitcher: PitcherRates,
}

impl MatchupRates {
    pub fn estimate(batter: &BattingLine, pitcher: &PitchingLine) -> Self {
        let rates = Self {
            batter: BatterRates::estimate(batter),
            pitcher: PitcherRates::estimate(pitcher),
        };
        debug!("estimated rates: {rates:?}");
        rates
    }
}

impl Default for MatchupRates {
    fn default() -> Self {
        Self::estimate(&BattingLine::default(), &PitchingLine::default())
    }
}

fn rate(numerator: Option<f64>, denominator: Option<f64>, default: f64) -> f64 {
    match denominator {
        Some(denominator) if denominator > 0.0 => numerator.unwrap_or(0.0) / denominator,
        _ => default,
    }
}
