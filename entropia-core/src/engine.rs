// entropia-core/src/engine.rs
//! Defines the `StatisticsEngine` trait.
//!
//! The trait is the seam between the statistics core and whatever drives it
//! (the interactive menu, the one-shot subcommands, tests). Implementors only
//! supply corpus loading and n-gram counting, which is where caching lives;
//! every metric is a provided method built on the pure kernel in
//! `entropia-stats`.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use std::path::Path;
use std::sync::Arc;

use entropia_stats::{
    self as stats, FrequencyTable, NormalizedText, RelativeFrequencyTable,
};

use crate::corpus::CorpusText;
use crate::errors::EntropiaError;
use crate::report::{
    ngram_rows, AnalysisReport, AnalysisRequest, ComparisonOutcome, ComparisonReport,
    ConditionalReport, Metric, NgramRow,
};

/// Core operations exposed to the presentation layer.
pub trait StatisticsEngine: Send + Sync {
    /// Loads and normalizes the corpus at `path`.
    ///
    /// Fails with `EntropiaError::NotFound` if nothing exists there.
    fn load(&self, path: &Path) -> Result<Arc<CorpusText>, EntropiaError>;

    /// Frequency table of all overlapping `n`-grams of `text`.
    ///
    /// Fails with `EntropiaError::InvalidOrder` for `n == 0`.
    fn ngrams(&self, text: &NormalizedText, n: usize) -> Result<Arc<FrequencyTable>, EntropiaError>;

    /// Frequency table for an already loaded corpus.
    ///
    /// The default implementation defers to [`StatisticsEngine::ngrams`];
    /// caching implementations can use the precomputed fingerprint instead.
    fn corpus_ngrams(&self, corpus: &CorpusText, n: usize) -> Result<Arc<FrequencyTable>, EntropiaError> {
        self.ngrams(&corpus.text, n)
    }

    /// Relative frequencies; an empty table maps to an empty distribution.
    fn relative_freq(&self, counts: &FrequencyTable) -> RelativeFrequencyTable {
        stats::relative_freq(counts)
    }

    fn entropy(&self, probs: &RelativeFrequencyTable) -> f64 {
        stats::entropy(probs)
    }

    fn conditional_entropy(&self, joint: &RelativeFrequencyTable, unigram: &RelativeFrequencyTable) -> f64 {
        stats::conditional_entropy(joint, unigram)
    }

    fn kl_divergence(&self, p: &RelativeFrequencyTable, q: &RelativeFrequencyTable) -> f64 {
        stats::kl_divergence(p, q)
    }

    fn js_divergence(&self, p: &RelativeFrequencyTable, q: &RelativeFrequencyTable) -> f64 {
        stats::js_divergence(p, q)
    }

    /// Zipf exponent, or `InsufficientData` with fewer than two positive entries.
    fn zipf_alpha(&self, freqs: &RelativeFrequencyTable) -> Result<f64, EntropiaError> {
        stats::zipf_alpha(freqs).map_err(|e| EntropiaError::insufficient("Zipf alpha", e))
    }

    /// Relative frequencies of a corpus at order `n`, failing on an empty table.
    fn distribution(&self, corpus: &CorpusText, n: usize) -> Result<(Arc<FrequencyTable>, RelativeFrequencyTable), EntropiaError> {
        let counts = self.corpus_ngrams(corpus, n)?;
        if counts.is_empty() {
            return Err(EntropiaError::InsufficientData {
                metric: "relative frequencies",
                required: 1,
                found: 0,
            });
        }
        let probs = self.relative_freq(&counts);
        Ok((counts, probs))
    }

    /// All rows of the order-`n` table for the corpus at `path`, ready for export.
    fn frequency_rows(&self, path: &Path, n: usize) -> Result<Vec<NgramRow>, EntropiaError> {
        let corpus = self.load(path)?;
        let counts = self.corpus_ngrams(&corpus, n)?;
        let probs = self.relative_freq(&counts);
        Ok(ngram_rows(&counts, &probs))
    }

    /// Entropy of both corpora plus KL both ways and JS at order `n`.
    fn compare(&self, left: &Path, right: &Path, n: usize) -> Result<ComparisonReport, EntropiaError> {
        let left_corpus = self.load(left)?;
        let right_corpus = self.load(right)?;
        let (_, p) = self.distribution(&left_corpus, n)?;
        let (_, q) = self.distribution(&right_corpus, n)?;

        Ok(ComparisonReport {
            left: left.display().to_string(),
            right: right.display().to_string(),
            order: n,
            left_entropy: self.entropy(&p),
            right_entropy: self.entropy(&q),
            kl_left_right: self.kl_divergence(&p, &q),
            kl_right_left: self.kl_divergence(&q, &p),
            js: self.js_divergence(&p, &q),
        })
    }

    /// Builds the full report for one corpus and order.
    ///
    /// Only the primary corpus can fail the call. Metrics that cannot be
    /// computed and a missing comparison corpus are recorded in the report.
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, EntropiaError> {
        let corpus = self.load(&request.corpus)?;
        let (counts, probs) = self.distribution(&corpus, request.order)?;

        let entropy = self.entropy(&probs);
        let uniform_entropy = stats::uniform_entropy(request.alphabet_size);
        let mut top = ngram_rows(&counts, &probs);
        top.truncate(request.top_k);

        let zipf_alpha = (request.order == 1).then(|| match self.zipf_alpha(&probs) {
            Ok(value) => Metric::Computed { value },
            Err(e) => {
                warn!("Skipping Zipf alpha for {}: {}", request.label(), e);
                Metric::Skipped { reason: e.to_string() }
            }
        });

        let conditional = if request.order > 1 {
            let (_, unigrams) = self.distribution(&corpus, 1)?;
            let practical = self.conditional_entropy(&probs, &unigrams);
            let theoretical = self.entropy(&unigrams);
            Some(ConditionalReport {
                practical,
                theoretical,
                redundancy: stats::redundancy(theoretical, practical),
            })
        } else {
            None
        };

        let comparison = match (&request.compare_with, request.order) {
            (Some((partner, path)), 1) => Some(match self.compare(&request.corpus, path, 1) {
                Ok(mut report) => {
                    report.left = request.label();
                    report.right = partner.clone();
                    ComparisonOutcome::Compared(report)
                }
                Err(e) => {
                    warn!("Comparison with '{}' unavailable: {}", partner, e);
                    ComparisonOutcome::Unavailable {
                        partner: partner.clone(),
                        reason: e.to_string(),
                    }
                }
            }),
            (Some((partner, _)), order) => {
                debug!("Skipping comparison with '{}': only unigram reports are compared, got order {}", partner, order);
                None
            }
            (None, _) => None,
        };

        debug!(
            "Analyzed {} at order {}: {} windows, {} distinct, H = {:.4} bits",
            request.label(),
            request.order,
            counts.total(),
            counts.len(),
            entropy
        );

        Ok(AnalysisReport {
            corpus: request.label(),
            order: request.order,
            symbols: corpus.text.len(),
            total_ngrams: counts.total(),
            distinct_ngrams: counts.len(),
            top,
            entropy,
            uniform_entropy,
            redundancy: stats::redundancy(uniform_entropy, entropy),
            zipf_alpha,
            conditional,
            comparison,
        })
    }
}
