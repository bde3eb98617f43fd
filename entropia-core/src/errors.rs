//! errors.rs - Custom error types for the entropia-core library.
//!
//! Every failure the engine can hit is a distinct variant, so an interactive
//! caller can report it and carry on. Nothing in this crate exits the process.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

use entropia_stats::InsufficientData;

/// This enum represents all possible error types in the `entropia-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EntropiaError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Corpus '{}' is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    #[error("Not enough data to compute {metric}: need at least {required} non-zero entries, found {found}")]
    InsufficientData {
        metric: &'static str,
        required: usize,
        found: usize,
    },

    #[error("Invalid n-gram order {0}: n must be at least 1")]
    InvalidOrder(usize),

    #[error("Failed to export frequency table to '{}': {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}

impl EntropiaError {
    /// Wraps a kernel `InsufficientData` with the name of the metric that needed it.
    pub fn insufficient(metric: &'static str, cause: InsufficientData) -> Self {
        EntropiaError::InsufficientData {
            metric,
            required: cause.required,
            found: cause.found,
        }
    }

    /// True for the "corpus missing" condition the menu recovers from.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EntropiaError::NotFound { .. })
    }
}
