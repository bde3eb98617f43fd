// entropia-stats/src/table/mod.rs
//! Frequency and probability tables keyed by n-gram.
//!
//! Both tables are backed by a `BTreeMap`, so iteration order is the
//! lexicographic order of the n-grams and every derived computation is
//! deterministic.

extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// Raw n-gram counts for a single order `n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    order: usize,
    counts: BTreeMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Creates an empty table for n-grams of length `order`.
    pub fn new(order: usize) -> Self {
        Self {
            order,
            counts: BTreeMap::new(),
            total: 0,
        }
    }

    /// Builds a table from explicit `(ngram, count)` pairs. Repeated keys are summed.
    pub fn from_counts<I, S>(order: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut table = Self::new(order);
        for (gram, count) in pairs {
            table.add(gram.into(), count);
        }
        table
    }

    pub(crate) fn add(&mut self, gram: String, count: u64) {
        *self.counts.entry(gram).or_insert(0) += count;
        self.total += count;
    }

    /// The n-gram length this table was counted with.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Count for `gram`, zero if it never occurred.
    pub fn get(&self, gram: &str) -> u64 {
        self.counts.get(gram).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries sorted by descending count, ties broken by ascending n-gram.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Probability of each n-gram; values are in `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelativeFrequencyTable {
    probs: BTreeMap<String, f64>,
}

impl RelativeFrequencyTable {
    /// Builds a table from explicit `(ngram, probability)` pairs.
    ///
    /// The values are stored as given; callers are responsible for passing a
    /// distribution.
    pub fn from_probabilities<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            probs: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn get(&self, gram: &str) -> Option<f64> {
        self.probs.get(gram).copied()
    }

    pub fn contains(&self, gram: &str) -> bool {
        self.probs.contains_key(gram)
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probs.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.probs.values().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.probs.keys().map(String::as_str)
    }

    /// Sum of all probabilities.
    pub fn sum(&self) -> f64 {
        self.values().sum()
    }

    /// Entries sorted by descending probability, ties broken by ascending n-gram.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.iter().collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_from_counts_sums_duplicates() {
        let table = FrequencyTable::from_counts(1, vec![("a", 2), ("b", 1), ("a", 3)]);
        assert_eq!(table.get("a"), 5);
        assert_eq!(table.get("z"), 0);
        assert_eq!(table.total(), 6);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_ranked_is_stable_on_ties() {
        let table = FrequencyTable::from_counts(1, vec![("c", 2), ("a", 2), ("b", 5), ("d", 1)]);
        let ranked = table.ranked();
        assert_eq!(ranked, vec![("b", 5), ("a", 2), ("c", 2), ("d", 1)]);
    }

    #[test]
    fn test_relative_ranked_orders_by_probability() {
        let probs = RelativeFrequencyTable::from_probabilities(vec![("x", 0.25), ("y", 0.5), ("w", 0.25)]);
        let keys: Vec<&str> = probs.ranked().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["y", "w", "x"]);
        assert!((probs.sum() - 1.0).abs() < 1e-12);
    }
}
