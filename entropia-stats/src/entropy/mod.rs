// entropia-stats/src/entropy/mod.rs
use libm::log2;

use crate::table::{FrequencyTable, RelativeFrequencyTable};

/// Divides every count by the table total.
///
/// An empty table (total of zero) yields an empty distribution instead of
/// dividing by zero.
pub fn relative_freq(counts: &FrequencyTable) -> RelativeFrequencyTable {
    let total = counts.total();
    if total == 0 {
        return RelativeFrequencyTable::default();
    }

    let total = total as f64;
    RelativeFrequencyTable::from_probabilities(
        counts.iter().map(|(gram, count)| (gram, count as f64 / total)),
    )
}

/// Calculates the Shannon entropy of a distribution.
///
/// Returns the entropy in bits. Entries with `p <= 0` contribute nothing.
pub fn entropy(probs: &RelativeFrequencyTable) -> f64 {
    let mut entropy = 0.0;

    for p in probs.values() {
        if p > 0.0 {
            entropy -= p * log2(p);
        }
    }

    entropy
}

/// Practical conditional entropy, `H(joint) - H(unigram)`.
///
/// `joint` must be the order-n distribution and `unigram` the order-1
/// distribution of the same text. The orders are not checked here.
pub fn conditional_entropy(joint: &RelativeFrequencyTable, unigram: &RelativeFrequencyTable) -> f64 {
    entropy(joint) - entropy(unigram)
}

/// Entropy of a uniform distribution over `alphabet_size` symbols.
pub fn uniform_entropy(alphabet_size: usize) -> f64 {
    if alphabet_size == 0 {
        return 0.0;
    }
    log2(alphabet_size as f64)
}

/// Bits lost relative to a reference entropy, `h_max - h`.
pub fn redundancy(h_max: f64, h: f64) -> f64 {
    h_max - h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ngram::count_ngrams;
    use crate::normalize::normalize;
    extern crate alloc;
    use alloc::vec;
    use alloc::vec::Vec;
    use alloc::string::String;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_relative_freq_empty() {
        let probs = relative_freq(&FrequencyTable::new(2));
        assert!(probs.is_empty());
        assert_eq!(entropy(&probs), 0.0);
    }

    #[test]
    fn test_relative_freq_sums_to_one() {
        let text = normalize("La entropía de un texto en español no es la misma que en inglés.");
        for n in 1..=3 {
            let probs = relative_freq(&count_ngrams(&text, n));
            assert!((probs.sum() - 1.0).abs() < 1e-9);
            assert!(probs.values().all(|p| (0.0..=1.0).contains(&p)));
        }
    }

    #[test]
    fn test_entropy_fair_coin() {
        let probs = RelativeFrequencyTable::from_probabilities(vec![("a", 0.5), ("b", 0.5)]);
        assert!((entropy(&probs) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_entropy_zero_randomness() {
        let probs = relative_freq(&count_ngrams(&normalize("aaaaa"), 1));
        assert_eq!(entropy(&probs), 0.0);
    }

    #[test]
    fn test_entropy_uniform_matches_log2() {
        for k in [1usize, 2, 3, 8, 26, 27] {
            let p = 1.0 / k as f64;
            let keys: Vec<String> = (0..k).map(|i| alloc::format!("s{}", i)).collect();
            let probs = RelativeFrequencyTable::from_probabilities(keys.into_iter().map(|key| (key, p)));
            assert!((entropy(&probs) - uniform_entropy(k)).abs() < 1e-9, "k = {}", k);
        }
    }

    #[test]
    fn test_entropy_skips_zero_probabilities() {
        let probs = RelativeFrequencyTable::from_probabilities(vec![("a", 0.5), ("b", 0.5), ("c", 0.0)]);
        assert!((entropy(&probs) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_conditional_entropy_is_difference() {
        let text = normalize("abababababab");
        let uni = relative_freq(&count_ngrams(&text, 1));
        let bi = relative_freq(&count_ngrams(&text, 2));
        let expected = entropy(&bi) - entropy(&uni);
        assert!((conditional_entropy(&bi, &uni) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_uniform_entropy_and_redundancy() {
        assert_eq!(uniform_entropy(0), 0.0);
        assert!((uniform_entropy(8) - 3.0).abs() < EPSILON);
        assert!((redundancy(4.75, 4.0) - 0.75).abs() < EPSILON);
    }
}
