//! The Monte Carlo engine: repeated independent trials of the [sampler], tallied per outcome.
//!
//! Trials may be run on a single caller-supplied generator, or split into fixed-size shards that
//! run in parallel, each shard on its own generator seeded from the shard index. Because the shard
//! layout depends only on the trial count and the shard size, a sharded run yields the same tally
//! regardless of how many threads execute it or in which order the shards complete.

use rayon::prelude::*;
use tinyrand::{Rand, Seeded, Wyrand};
use tracing::trace;

use crate::outcome::{ByOutcome, OutcomeCategory, TrialResult};
use crate::sampler;
use crate::sampler::TrialProbs;

pub const DEFAULT_TRIALS: u64 = 2_000;

/// Outcome counts and base totals accumulated over a number of trials.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tally {
    pub counts: ByOutcome<u64>,
    pub total_bases: u64,
}

impl Tally {
    #[inline]
    pub fn record(&mut self, result: TrialResult) {
        self.counts[result.outcome] += 1;
        self.total_bases += result.bases as u64;
    }

    pub fn trials(&self) -> u64 {
        self.counts.values().iter().sum()
    }

    pub fn count(&self, outcome: OutcomeCategory) -> u64 {
        self.counts[outcome]
    }

    /// Element-wise sum of two tallies.
    pub fn merge(mut self, other: Tally) -> Tally {
        for (count, other_count) in self.counts.0.iter_mut().zip(other.counts.0) {
            *count += other_count;
        }
        self.total_bases += other.total_bases;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonteCarloEngine {
    trials: u64,
    probs: TrialProbs,
}

impl MonteCarloEngine {
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_probs(mut self, probs: TrialProbs) -> Self {
        self.probs = probs;
        self
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn probs(&self) -> &TrialProbs {
        &self.probs
    }

    /// Runs all trials sequentially on the given generator.
    pub fn simulate(&self, rand: &mut impl Rand) -> Tally {
        run_many(&self.probs, self.trials, rand)
    }

    /// Runs the trials in shards of at most `shard_trials` on the rayon pool. Shard `i` draws from
    /// a [Wyrand] seeded with [shard_seed]`(seed, i)`.
    pub fn simulate_sharded(&self, seed: u64, shard_trials: u64) -> Tally {
        debug_assert!(shard_trials > 0, "shard size must be positive");
        let shards = self.trials.div_ceil(shard_trials);
        trace!("{} trials across {shards} shards", self.trials);
        (0..shards)
            .into_par_iter()
            .map(|shard| {
                let start = shard * shard_trials;
                let trials = u64::min(shard_trials, self.trials - start);
                let mut rand = Wyrand::seed(shard_seed(seed, shard));
                run_many(&self.probs, trials, &mut rand)
            })
            .reduce(Tally::default, Tally::merge)
    }
}

impl Default for MonteCarloEngine {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            probs: TrialProbs::default(),
        }
    }
}

/// Seed of the generator backing a given shard. Shard 0 uses the base seed unchanged.
pub fn shard_seed(seed: u64, shard: u64) -> u64 {
    seed ^ shard.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn run_many(probs: &TrialProbs, trials: u64, rand: &mut impl Rand) -> Tally {
    let mut tally = Tally::default();
    for _ in 0..trials {
        tally.record(sampler::run_once(probs, rand));
    }
    tally
}
