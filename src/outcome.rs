//! The closed set of outcomes a simulated plate appearance can resolve to, and a fixed-size map
//! keyed by outcome.

use std::ops::{Index, IndexMut};

use ordinalizer::Ordinal;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// Outcome of a single trial. The declaration order is significant: it is the order in which
/// outcomes are reported and the order used to break ties when selecting the modal outcome.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Ordinal,
    EnumCount,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
pub enum OutcomeCategory {
    #[strum(serialize = "HR")]
    #[serde(rename = "HR")]
    HomeRun,

    #[strum(serialize = "3B")]
    #[serde(rename = "3B")]
    Triple,

    #[strum(serialize = "2B")]
    #[serde(rename = "2B")]
    Double,

    #[strum(serialize = "1B")]
    #[serde(rename = "1B")]
    Single,

    #[strum(serialize = "BB")]
    #[serde(rename = "BB")]
    Walk,

    #[strum(serialize = "SO")]
    #[serde(rename = "SO")]
    Strikeout,

    #[strum(serialize = "OUT")]
    #[serde(rename = "OUT")]
    Out,
}

impl OutcomeCategory {
    /// Number of bases the batter is credited with.
    pub const fn bases(&self) -> u8 {
        match self {
            OutcomeCategory::HomeRun => 4,
            OutcomeCategory::Triple => 3,
            OutcomeCategory::Double => 2,
            OutcomeCategory::Single | OutcomeCategory::Walk => 1,
            OutcomeCategory::Strikeout | OutcomeCategory::Out => 0,
        }
    }

    pub const fn is_hit(&self) -> bool {
        matches!(
            self,
            OutcomeCategory::HomeRun
                | OutcomeCategory::Triple
                | OutcomeCategory::Double
                | OutcomeCategory::Single
        )
    }

    pub const fn is_on_base(&self) -> bool {
        self.is_hit() || matches!(self, OutcomeCategory::Walk)
    }
}

/// The product of one simulated plate appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialResult {
    pub outcome: OutcomeCategory,
    pub bases: u8,
}

impl From<OutcomeCategory> for TrialResult {
    fn from(outcome: OutcomeCategory) -> Self {
        Self {
            outcome,
            bases: outcome.bases(),
        }
    }
}

/// A value for every [OutcomeCategory], stored densely by ordinal. Serialises as a map keyed by
/// the outcome code, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ByOutcome<T>(pub [T; <OutcomeCategory as EnumCount>::COUNT]);

impl<T> ByOutcome<T> {
    pub fn iter(&self) -> impl Iterator<Item = (OutcomeCategory, &T)> {
        OutcomeCategory::iter().zip(self.0.iter())
    }

    pub fn values(&self) -> &[T] {
        &self.0
    }
}

impl<T> Index<OutcomeCategory> for ByOutcome<T> {
    type Output = T;

    fn index(&self, outcome: OutcomeCategory) -> &Self::Output {
        &self.0[outcome.ordinal()]
    }
}

impl<T> IndexMut<OutcomeCategory> for ByOutcome<T> {
    fn index_mut(&mut self, outcome: OutcomeCategory) -> &mut Self::Output {
        &mut self.0[outcome.ordinal()]
    }
}

impl<T: Serialize> Serialize for ByOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (outcome, value) in self.iter() {
            map.serialize_entry(&outcome, value)?;
        }
        map.end()
    }
}
