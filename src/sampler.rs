//! Resolution of a single trial into an [OutcomeCategory].
//!
//! A trial is resolved in three sequential stages, each with its own uniform draw:
//!
//! 1. plate discipline: strikeout, walk or ball in play;
//! 2. contact quality: for a ball in play, hit or out, using the Log5 matchup hit probability;
//! 3. batted-ball type: for a hit, home run, triple, double or single.
//!
//! The stages draw on different statistical sources and are conditionally independent, so they
//! must not be collapsed into a single seven-way draw.

use tinyrand::Rand;

use crate::log5;
use crate::log5::LeagueAverage;
use crate::outcome::{OutcomeCategory, TrialResult};
use crate::rates::{HitTypeRatios, MatchupRates};

/// Upper bound on the strikeout probability of a single plate appearance.
pub const MAX_STRIKEOUT_PROB: f64 = 0.5;

/// Upper bound on the walk probability of a single plate appearance.
pub const MAX_WALK_PROB: f64 = 0.3;

/// Upper bound on the combined strikeout and walk probability. The remainder is left for balls in
/// play.
pub const MAX_DISCIPLINE_PROB: f64 = 0.8;

/// Branch probabilities for each stage of a trial. These depend only on the matchup, so they are
/// derived once and reused across all trials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialProbs {
    pub strikeout: f64,
    pub walk: f64,
    pub hit: f64,
    pub hit_types: HitTypeRatios,
}

impl TrialProbs {
    pub fn new(rates: &MatchupRates, league: LeagueAverage) -> Self {
        let (strikeout, walk) = discipline_probs(rates);
        Self {
            strikeout,
            walk,
            hit: log5::combine(rates.batter.average, rates.pitcher.average, league),
            hit_types: rates.batter.hit_types.normalised(),
        }
    }

    pub fn in_play(&self) -> f64 {
        1.0 - self.strikeout - self.walk
    }
}

impl Default for TrialProbs {
    fn default() -> Self {
        Self::new(&MatchupRates::default(), LeagueAverage::default())
    }
}

fn discipline_probs(rates: &MatchupRates) -> (f64, f64) {
    let mut strikeout = f64::min(
        (rates.batter.strikeout + rates.pitcher.strikeout) / 2.0,
        MAX_STRIKEOUT_PROB,
    );
    let mut walk = f64::min((rates.batter.walk + rates.pitcher.walk) / 2.0, MAX_WALK_PROB);
    let total = strikeout + walk;
    if total > MAX_DISCIPLINE_PROB {
        let scale = MAX_DISCIPLINE_PROB / total;
        strikeout *= scale;
        walk *= scale;
    }
    (strikeout, walk)
}

/// Simulates one plate appearance.
pub fn run_once(probs: &TrialProbs, rand: &mut impl Rand) -> TrialResult {
    let roll = random_f64(rand);
    if roll < probs.strikeout {
        return OutcomeCategory::Strikeout.into();
    }
    if roll < probs.strikeout + probs.walk {
        return OutcomeCategory::Walk.into();
    }

    let roll_hit = random_f64(rand);
    if roll_hit > probs.hit {
        return OutcomeCategory::Out.into();
    }

    let roll_type = random_f64(rand);
    let types = &probs.hit_types;
    let outcome = if roll_type < types.home_run {
        OutcomeCategory::HomeRun
    } else if roll_type < types.home_run + types.triple {
        OutcomeCategory::Triple
    } else if roll_type < types.home_run + types.triple + types.double {
        OutcomeCategory::Double
    } else {
        OutcomeCategory::Single
    };
    outcome.into()
}

const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// A uniform draw from [0, 1), built from the top 53 bits of the generator output.
#[inline]
pub fn random_f64(rand: &mut impl Rand) -> f64 {
    (rand.next_u64() >> 11) as f64 * F64_UNIT
}
