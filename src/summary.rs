//! Summary statistics over a completed [Tally].

use strum::IntoEnumIterator;

use crate::mc::Tally;
use crate::outcome::{ByOutcome, OutcomeCategory};

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    pub trials: u64,
    pub counts: ByOutcome<u64>,
    /// Share of trials per outcome. Sums to 1 for any non-empty tally.
    pub distribution: ByOutcome<f64>,
    pub average_bases: f64,
    pub hit_rate: f64,
    pub on_base_rate: f64,
    pub modal: OutcomeCategory,
}

impl SimulationSummary {
    pub fn modal_bases(&self) -> u8 {
        self.modal.bases()
    }
}

impl From<&Tally> for SimulationSummary {
    fn from(tally: &Tally) -> Self {
        let trials = tally.trials();
        let mut distribution = ByOutcome::<f64>::default();
        let mut average_bases = 0.0;
        if trials > 0 {
            for outcome in OutcomeCategory::iter() {
                distribution[outcome] = tally.counts[outcome] as f64 / trials as f64;
            }
            average_bases = tally.total_bases as f64 / trials as f64;
        }

        let hit_rate: f64 = distribution
            .iter()
            .filter(|(outcome, _)| outcome.is_hit())
            .map(|(_, &share)| share)
            .sum();
        let on_base_rate = hit_rate + distribution[OutcomeCategory::Walk];

        Self {
            trials,
            counts: tally.counts,
            distribution,
            average_bases,
            hit_rate,
            on_base_rate,
            modal: modal(&tally.counts),
        }
    }
}

/// The outcome with the highest count. Ties go to the outcome declared first.
pub fn modal(counts: &ByOutcome<u64>) -> OutcomeCategory {
    let mut modal = OutcomeCategory::HomeRun;
    let mut modal_count = 0;
    for (outcome, &count) in counts.iter() {
        if count > modal_count {
            modal = outcome;
            modal_count = count;
        }
    }
    modal
}

/// Rounds a rate to 3 decimal places for presentation.
pub fn round_rate(value: f64) -> f64 {
    (value * 1_000.0).round() / 1_000.0
}
