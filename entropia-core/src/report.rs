// entropia-core/src/report.rs
//! Structured results handed to presentation layers.
//!
//! Nothing here formats text for a terminal; the CLI decides how rows and
//! metrics are laid out.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use entropia_stats::{FrequencyTable, RelativeFrequencyTable};

/// One line of a frequency report or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NgramRow {
    /// 1-based position in descending-count order.
    pub rank: usize,
    pub ngram: String,
    pub count: u64,
    /// Relative frequency in `[0, 1]`.
    pub probability: f64,
}

impl NgramRow {
    pub fn percentage(&self) -> f64 {
        self.probability * 100.0
    }
}

/// Rows for every n-gram in `counts`, ordered by descending count with ties
/// broken by the n-gram itself.
pub fn ngram_rows(counts: &FrequencyTable, probs: &RelativeFrequencyTable) -> Vec<NgramRow> {
    counts
        .ranked()
        .into_iter()
        .enumerate()
        .map(|(i, (gram, count))| NgramRow {
            rank: i + 1,
            ngram: gram.to_string(),
            count,
            probability: probs.get(gram).unwrap_or(0.0),
        })
        .collect()
}

/// A metric that may not be computable for the data at hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Metric {
    Computed { value: f64 },
    Skipped { reason: String },
}

impl Metric {
    pub fn value(&self) -> Option<f64> {
        match self {
            Metric::Computed { value } => Some(*value),
            Metric::Skipped { .. } => None,
        }
    }
}

/// Conditional-entropy figures reported for orders above one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalReport {
    /// `H(n-grams) - H(unigrams)`.
    pub practical: f64,
    /// Unigram entropy, the value the practical figure is measured against.
    pub theoretical: f64,
    /// `theoretical - practical`.
    pub redundancy: f64,
}

/// Unigram comparison between two corpora.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub left: String,
    pub right: String,
    pub order: usize,
    pub left_entropy: f64,
    pub right_entropy: f64,
    /// `KL(left || right)`, smoothed (see `entropia_stats::KL_FLOOR`).
    pub kl_left_right: f64,
    /// `KL(right || left)`, smoothed.
    pub kl_right_left: f64,
    pub js: f64,
}

/// Outcome of the optional comparison step. A missing partner corpus does
/// not fail the whole report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComparisonOutcome {
    Compared(ComparisonReport),
    Unavailable { partner: String, reason: String },
}

/// What to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub corpus: PathBuf,
    /// Name shown in the report; defaults to the path.
    pub label: Option<String>,
    pub order: usize,
    pub top_k: usize,
    /// Alphabet size for the uniform-entropy baseline.
    pub alphabet_size: usize,
    /// Corpus compared against for unigram analyses.
    pub compare_with: Option<(String, PathBuf)>,
}

impl AnalysisRequest {
    pub fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.corpus.display().to_string())
    }
}

/// Everything shown for one corpus at one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub corpus: String,
    pub order: usize,
    /// Normalized symbols in the corpus.
    pub symbols: usize,
    pub total_ngrams: u64,
    pub distinct_ngrams: usize,
    pub top: Vec<NgramRow>,
    /// Shannon entropy of the order-n distribution, in bits.
    pub entropy: f64,
    /// `log2(alphabet_size)`.
    pub uniform_entropy: f64,
    /// `uniform_entropy - entropy`.
    pub redundancy: f64,
    /// Only for unigrams.
    pub zipf_alpha: Option<Metric>,
    /// Only for orders above one.
    pub conditional: Option<ConditionalReport>,
    /// Only for unigrams with a configured partner.
    pub comparison: Option<ComparisonOutcome>,
}
