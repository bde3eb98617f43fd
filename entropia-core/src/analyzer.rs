// entropia-core/src/analyzer.rs
//! The caching `StatisticsEngine` used by the CLI.
//!
//! A `CorpusAnalyzer` owns two caches for its whole lifetime:
//! path -> normalized corpus, and (text fingerprint, n) -> frequency table.
//! Build one at startup and share it; neither cache ever shrinks.

use log::debug;
use std::path::Path;
use std::sync::Arc;

use entropia_stats::{count_ngrams, FrequencyTable, NormalizedText};

use crate::cache::KeyedCache;
use crate::config::AnalyzerConfig;
use crate::corpus::{CorpusCache, CorpusText};
use crate::engine::StatisticsEngine;
use crate::errors::EntropiaError;
use crate::fingerprint::text_fingerprint;

/// A statistics engine with memoized corpus loading and n-gram counting.
#[derive(Debug)]
pub struct CorpusAnalyzer {
    corpora: CorpusCache,
    tables: KeyedCache<(String, usize), FrequencyTable>,
}

impl Default for CorpusAnalyzer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl CorpusAnalyzer {
    /// Creates an analyzer. `max_chars` caps how much of each file is read.
    pub fn new(max_chars: Option<usize>) -> Self {
        Self {
            corpora: CorpusCache::new(max_chars),
            tables: KeyedCache::new("ngram"),
        }
    }

    /// Creates an analyzer honoring the configuration's character cap.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        debug!("Initializing CorpusAnalyzer with max_chars: {:?}", config.analysis.max_chars);
        Self::new(config.analysis.max_chars)
    }

    /// Number of corpora loaded so far.
    pub fn cached_corpora(&self) -> usize {
        self.corpora.len()
    }

    /// Number of frequency tables computed so far.
    pub fn cached_tables(&self) -> usize {
        self.tables.len()
    }

    fn table_for(&self, fingerprint: &str, text: &NormalizedText, n: usize) -> Result<Arc<FrequencyTable>, EntropiaError> {
        if n == 0 {
            return Err(EntropiaError::InvalidOrder(n));
        }
        self.tables
            .get_or_try_insert_with(&(fingerprint.to_string(), n), || {
                Ok::<_, EntropiaError>(count_ngrams(text, n))
            })
    }
}

impl StatisticsEngine for CorpusAnalyzer {
    fn load(&self, path: &Path) -> Result<Arc<CorpusText>, EntropiaError> {
        self.corpora.load(path)
    }

    fn ngrams(&self, text: &NormalizedText, n: usize) -> Result<Arc<FrequencyTable>, EntropiaError> {
        self.table_for(&text_fingerprint(text), text, n)
    }

    fn corpus_ngrams(&self, corpus: &CorpusText, n: usize) -> Result<Arc<FrequencyTable>, EntropiaError> {
        self.table_for(&corpus.fingerprint, &corpus.text, n)
    }
}
