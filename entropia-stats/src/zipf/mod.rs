// entropia-stats/src/zipf/mod.rs
//! Rank/frequency power-law fit.

extern crate alloc;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use libm::log;

use crate::statistics::linear_fit;
use crate::table::RelativeFrequencyTable;

/// Not enough positive frequencies to fit a slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientData {
    pub required: usize,
    pub found: usize,
}

impl fmt::Display for InsufficientData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "need at least {} positive frequencies, found {}",
            self.required, self.found
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InsufficientData {}

/// Zipf exponent of a distribution.
///
/// See [`zipf_alpha_from_values`].
pub fn zipf_alpha(freqs: &RelativeFrequencyTable) -> Result<f64, InsufficientData> {
    let values: Vec<f64> = freqs.values().collect();
    zipf_alpha_from_values(&values)
}

/// Sorts `values` in descending order, assigns ranks `1..=K` and fits
/// `ln(value)` against `ln(rank)` by least squares over the positive values.
/// Returns the negated slope.
///
/// Raw counts and probabilities give the same exponent since scaling only
/// moves the intercept.
pub fn zipf_alpha_from_values(values: &[f64]) -> Result<f64, InsufficientData> {
    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));

    let (log_ranks, log_freqs): (Vec<f64>, Vec<f64>) = sorted
        .iter()
        .enumerate()
        .filter(|(_, freq)| **freq > 0.0)
        .map(|(i, freq)| (log((i + 1) as f64), log(*freq)))
        .unzip();

    let found = log_ranks.len();
    linear_fit(&log_ranks, &log_freqs)
        .map(|fit| -fit.slope)
        .ok_or(InsufficientData { required: 2, found })
}
