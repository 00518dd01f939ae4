//! A Monte Carlo model of a single plate appearance between a given batter and pitcher.
//! Season counting stats are reduced to per-plate-appearance rates, the batter's and pitcher's
//! batting averages are combined via Log5, and the outcome distribution is estimated by sampling
//! each trial through staged strikeout/walk, hit/out and hit-type draws.

pub mod commentary;
pub mod config;
pub mod file;
pub mod log5;
pub mod mc;
pub mod outcome;
pub mod print;
pub mod rates;
pub mod request;
pub mod sampler;
pub mod stats;
pub mod summary;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
