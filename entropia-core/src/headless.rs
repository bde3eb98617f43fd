// entropia-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive use of the engine.

use std::path::Path;

use crate::analyzer::CorpusAnalyzer;
use crate::config::AnalyzerConfig;
use crate::engine::StatisticsEngine;
use crate::errors::EntropiaError;
use crate::export::write_frequency_csv;
use crate::report::{AnalysisReport, AnalysisRequest};
use entropia_stats::ALPHABET;

/// Builds the request for `path` at order `n`, filling label, alphabet size,
/// top-k and comparison partner from the configuration when the path belongs
/// to a configured corpus.
pub fn request_for_path(config: &AnalyzerConfig, path: &Path, n: usize) -> AnalysisRequest {
    let spec = config.corpus_for_path(path);
    AnalysisRequest {
        corpus: path.to_path_buf(),
        label: spec.map(|s| s.display_name().to_string()),
        order: n,
        top_k: config.analysis.top_k(),
        alphabet_size: spec.map_or(ALPHABET.len(), |s| s.alphabet_size),
        compare_with: spec
            .and_then(|s| config.partner_of(s))
            .map(|p| (p.display_name().to_string(), p.path.clone())),
    }
}

/// Analyzes a single corpus with a fresh analyzer.
pub fn headless_analyze(config: &AnalyzerConfig, path: &Path, n: usize) -> Result<AnalysisReport, EntropiaError> {
    let analyzer = CorpusAnalyzer::from_config(config);
    analyzer.analyze(&request_for_path(config, path, n))
}

/// Counts `n`-grams of `corpus` and writes them to `output` as CSV.
/// Returns the number of rows written.
pub fn headless_export(config: &AnalyzerConfig, corpus: &Path, n: usize, output: &Path) -> Result<usize, EntropiaError> {
    let analyzer = CorpusAnalyzer::from_config(config);
    let rows = analyzer.frequency_rows(corpus, n)?;
    write_frequency_csv(output, &rows)
}
