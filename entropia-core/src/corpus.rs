//! corpus.rs - Loads corpus files and memoizes their normalized text.
//!
//! A corpus is read once per path for the lifetime of its `CorpusCache`.
//! Changes to the file after the first load are not observed.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use entropia_stats::{normalize, NormalizedText};

use crate::cache::KeyedCache;
use crate::errors::EntropiaError;
use crate::fingerprint::text_fingerprint;

/// A normalized corpus together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusText {
    /// Path exactly as it was requested.
    pub source: PathBuf,
    /// Normalized symbols.
    pub text: NormalizedText,
    /// SHA-256 of `text`, the key for cached n-gram tables.
    pub fingerprint: String,
    /// Characters read from the file before normalization.
    pub raw_chars: usize,
}

impl CorpusText {
    /// Normalizes in-memory text without touching the file system.
    pub fn from_raw(source: impl Into<PathBuf>, raw: &str) -> Self {
        let text = normalize(raw);
        let fingerprint = text_fingerprint(&text);
        Self {
            source: source.into(),
            text,
            fingerprint,
            raw_chars: raw.chars().count(),
        }
    }
}

/// Path-keyed cache of normalized corpora.
#[derive(Debug)]
pub struct CorpusCache {
    entries: KeyedCache<PathBuf, CorpusText>,
    max_chars: Option<usize>,
}

impl Default for CorpusCache {
    fn default() -> Self {
        Self::new(None)
    }
}

impl CorpusCache {
    /// Creates an empty cache. With `max_chars` set, only that many characters
    /// of each file are analyzed.
    pub fn new(max_chars: Option<usize>) -> Self {
        Self {
            entries: KeyedCache::new("corpus"),
            max_chars,
        }
    }

    /// Returns the normalized corpus at `path`, reading it on first use.
    ///
    /// # Errors
    /// * `NotFound` if no regular file exists at `path`.
    /// * `Encoding` if the file is not valid UTF-8.
    /// * `Io` for any other read failure.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Arc<CorpusText>, EntropiaError> {
        let path = path.as_ref();
        self.entries
            .get_or_try_insert_with(&path.to_path_buf(), || self.read_corpus(path))
    }

    /// True if `path` has already been loaded successfully.
    pub fn contains<P: AsRef<Path>>(&self, path: P) -> bool {
        self.entries.contains(&path.as_ref().to_path_buf())
    }

    /// Number of cached corpora.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn read_corpus(&self, path: &Path) -> Result<CorpusText, EntropiaError> {
        if !path.is_file() {
            return Err(EntropiaError::NotFound { path: path.to_path_buf() });
        }

        let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
        let raw = String::from_utf8(bytes)
            .map_err(|_| EntropiaError::Encoding { path: path.to_path_buf() })?;
        let raw = truncate_chars(&raw, self.max_chars);

        let corpus = CorpusText::from_raw(path, raw);
        info!(
            "Loaded corpus {} ({} chars, {} normalized symbols).",
            path.display(),
            corpus.raw_chars,
            corpus.text.len()
        );
        Ok(corpus)
    }
}

/// A file removed between the existence check and the read is still `NotFound`.
fn read_error(path: &Path, err: io::Error) -> EntropiaError {
    match err.kind() {
        io::ErrorKind::NotFound => EntropiaError::NotFound { path: path.to_path_buf() },
        _ => EntropiaError::Io(err),
    }
}

/// Cuts `raw` after `limit` characters, on a character boundary.
fn truncate_chars(raw: &str, limit: Option<usize>) -> &str {
    match limit.and_then(|max| raw.char_indices().nth(max)) {
        Some((cut, _)) => {
            debug!("Truncating corpus to {} characters.", limit.unwrap_or_default());
            &raw[..cut]
        }
        None => raw,
    }
}
