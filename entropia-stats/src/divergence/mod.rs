// entropia-stats/src/divergence/mod.rs
//! Kullback-Leibler and Jensen-Shannon divergence between n-gram distributions.

extern crate alloc;
use alloc::collections::BTreeMap;
use libm::log2;

use crate::table::RelativeFrequencyTable;

/// Probability assumed for an n-gram of `p` that is missing from `q`.
///
/// This is a smoothing constant: with it the result stays finite where exact
/// KL divergence would be infinite, so the value is an approximation
/// whenever `p` has support outside `q`.
pub const KL_FLOOR: f64 = 1e-12;

/// `KL(p || q)` in bits, summed over the n-grams present in `p`.
///
/// Missing entries of `q` are replaced by [`KL_FLOOR`]. Entries with
/// `p(k) <= 0` contribute nothing.
pub fn kl_divergence(p: &RelativeFrequencyTable, q: &RelativeFrequencyTable) -> f64 {
    p.iter()
        .filter(|(_, pk)| *pk > 0.0)
        .map(|(gram, pk)| {
            let qk = q.get(gram).unwrap_or(KL_FLOOR);
            pk * log2(pk / qk)
        })
        .sum()
}

/// `JS(p, q)` in bits: the mean of `KL(p || m)` and `KL(q || m)` where `m` is
/// the average of `p` and `q` over the union of their supports.
pub fn js_divergence(p: &RelativeFrequencyTable, q: &RelativeFrequencyTable) -> f64 {
    let mut mixture: BTreeMap<&str, f64> = BTreeMap::new();
    for (gram, pk) in p.iter() {
        *mixture.entry(gram).or_insert(0.0) += pk / 2.0;
    }
    for (gram, qk) in q.iter() {
        *mixture.entry(gram).or_insert(0.0) += qk / 2.0;
    }
    let m = RelativeFrequencyTable::from_probabilities(mixture);

    (kl_divergence(p, &m) + kl_divergence(q, &m)) / 2.0
}
