// entropia-core/src/lib.rs
//! # EntropiaCheck Core Library
//!
//! `entropia-core` turns corpus files into information-theoretic reports. It
//! loads and normalizes text, memoizes n-gram frequency tables, and derives
//! entropy, conditional entropy, KL/JS divergence and the Zipf exponent from
//! them. The math itself lives in the `no_std` crate `entropia-stats`; this
//! crate adds file access, caching, configuration and export.
//!
//! ## Modules
//!
//! * `config`: Named corpora and analysis settings, loaded from YAML and merged over defaults.
//! * `errors`: The `EntropiaError` enum.
//! * `cache`: The insert-once `KeyedCache` backing both caches.
//! * `corpus`: `CorpusCache`, the path-keyed store of normalized corpora.
//! * `fingerprint`: Content hashes used as n-gram cache keys.
//! * `engine`: The `StatisticsEngine` trait and its provided metric methods.
//! * `analyzer`: `CorpusAnalyzer`, the caching engine implementation.
//! * `report`: Structured rows and reports for presentation layers.
//! * `export`: All-or-nothing CSV export of frequency tables.
//! * `headless`: One-shot helpers for non-interactive use.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use entropia_core::{AnalyzerConfig, CorpusAnalyzer, StatisticsEngine};
//! use entropia_core::headless::request_for_path;
//! use std::path::Path;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = AnalyzerConfig::load_default()?;
//!     let analyzer = CorpusAnalyzer::from_config(&config);
//!
//!     let request = request_for_path(&config, Path::new("esp.txt"), 1);
//!     let report = analyzer.analyze(&request)?;
//!     println!("H1 = {:.4} bits", report.entropy);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Engine operations return `EntropiaError`, with a distinct variant for each
//! recoverable condition (missing corpus, insufficient data, failed export).
//! Configuration loading uses `anyhow::Error` with context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod analyzer;
pub mod cache;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod errors;
pub mod export;
pub mod fingerprint;
pub mod headless;
pub mod report;

/// Re-exports the configuration types.
pub use config::{
    merge_config,
    AnalysisSettings,
    AnalyzerConfig,
    CorpusSpec,
    DEFAULT_TOP_K,
    MAX_ORDER,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::EntropiaError;

/// Re-exports the engine trait and its caching implementation.
pub use engine::StatisticsEngine;
pub use analyzer::CorpusAnalyzer;
pub use corpus::{CorpusCache, CorpusText};

/// Re-exports report structures.
pub use report::{
    AnalysisReport,
    AnalysisRequest,
    ComparisonOutcome,
    ComparisonReport,
    ConditionalReport,
    Metric,
    NgramRow,
};

pub use export::{write_frequency_csv, CSV_HEADERS};
pub use headless::{headless_analyze, headless_export};

/// Re-exports the statistics kernel so callers need a single dependency.
pub use entropia_stats as stats;
