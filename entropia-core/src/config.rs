//! Configuration management for `entropia-core`.
//!
//! Defines the named corpora the menu offers and the analysis settings
//! (default n-gram order, size of the top table, optional character cap).
//! Configurations are YAML; a user file is merged over the embedded defaults
//! by corpus name.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use entropia_stats::ALPHABET;

/// Largest n-gram order offered by the interactive menu.
pub const MAX_ORDER: usize = 3;
/// Order used when the configuration does not set one.
pub const DEFAULT_ORDER: usize = 1;
/// Rows shown in the top n-gram table when the configuration does not set it.
pub const DEFAULT_TOP_K: usize = 20;
/// File name looked up in the standard configuration locations.
pub const CONFIG_FILE_NAME: &str = "entropia.yaml";

fn default_alphabet_size() -> usize {
    ALPHABET.len()
}

/// A corpus the user can pick by name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CorpusSpec {
    /// Unique identifier (e.g. "esp").
    pub name: String,
    /// Human-readable name shown in menus and reports.
    #[serde(default)]
    pub label: Option<String>,
    /// Location of the UTF-8 text file.
    pub path: PathBuf,
    /// Symbols in the language's alphabet, used for the uniform-entropy baseline.
    #[serde(default = "default_alphabet_size")]
    pub alphabet_size: usize,
    /// Name of the corpus to compare against when reporting unigrams.
    #[serde(default)]
    pub compare_with: Option<String>,
}

impl CorpusSpec {
    /// Label if set, name otherwise.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Tunables for the analysis itself. Unset values fall back to the defaults above.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub default_order: Option<usize>,
    pub top_k: Option<usize>,
    /// Maximum number of raw characters read from a corpus.
    pub max_chars: Option<usize>,
}

impl AnalysisSettings {
    pub fn default_order(&self) -> usize {
        self.default_order.unwrap_or(DEFAULT_ORDER)
    }

    pub fn top_k(&self) -> usize {
        self.top_k.unwrap_or(DEFAULT_TOP_K)
    }
}

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub corpora: Vec<CorpusSpec>,
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

impl AnalyzerConfig {
    /// Loads a configuration from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AnalyzerConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_config(&config)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!("Loaded {} corpora from file {}.", config.corpora.len(), path.display());

        Ok(config)
    }

    /// Loads the built-in configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: AnalyzerConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default configuration")?;

        debug!("Loaded {} default corpora.", config.corpora.len());
        Ok(config)
    }

    /// Looks for a user configuration in the standard locations and returns
    /// the first one found, parsed.
    pub fn discover() -> Result<Option<Self>> {
        match config_candidate_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from_file(&path).map(Some),
            None => {
                debug!("No user configuration found in standard locations.");
                Ok(None)
            }
        }
    }

    /// Finds a corpus by name.
    pub fn corpus(&self, name: &str) -> Option<&CorpusSpec> {
        self.corpora.iter().find(|c| c.name == name)
    }

    /// Finds the corpus configured for `path`, if any.
    pub fn corpus_for_path(&self, path: &Path) -> Option<&CorpusSpec> {
        self.corpora.iter().find(|c| c.path == path)
    }

    /// Checks that every `compare_with` names a corpus of this configuration.
    /// Run on the merged configuration, since a user file may pair its own
    /// corpus with a built-in one.
    pub fn check_partners(&self) -> Result<()> {
        let unknown: Vec<String> = self
            .corpora
            .iter()
            .filter_map(|c| c.compare_with.as_ref().map(|p| (c, p)))
            .filter(|(_, partner)| self.corpus(partner).is_none())
            .map(|(c, partner)| format!("Corpus '{}' compares with unknown corpus '{}'.", c.name, partner))
            .collect();

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Configuration validation failed:\n{}", unknown.join("\n")))
        }
    }

    /// The comparison partner of `corpus`: its `compare_with` entry if set,
    /// otherwise the first other corpus in the list.
    pub fn partner_of(&self, corpus: &CorpusSpec) -> Option<&CorpusSpec> {
        match &corpus.compare_with {
            Some(name) => self.corpus(name),
            None => self.corpora.iter().find(|c| c.name != corpus.name),
        }
    }
}

/// Candidate locations for a user configuration file, most specific first.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let candidates = vec![
        Some(PathBuf::from(".").join(CONFIG_FILE_NAME)),
        dirs::config_dir().map(|p| p.join("entropia").join(CONFIG_FILE_NAME)),
        dirs::home_dir().map(|p| p.join(".entropia").join(CONFIG_FILE_NAME)),
    ];

    candidates.into_iter().flatten().collect()
}

/// Merges a user configuration over the defaults.
///
/// Corpora are matched by name: a user entry replaces the default entry with
/// the same name, new names are appended. Analysis settings set by the user
/// override the defaults one by one.
pub fn merge_config(default_config: AnalyzerConfig, user_config: Option<AnalyzerConfig>) -> AnalyzerConfig {
    let Some(user_cfg) = user_config else {
        return default_config;
    };
    debug!(
        "Merging {} user corpora over {} defaults.",
        user_cfg.corpora.len(),
        default_config.corpora.len()
    );

    let mut corpora = default_config.corpora;
    let positions: HashMap<String, usize> = corpora
        .iter()
        .enumerate()
        .map(|(i, c)| (c.name.clone(), i))
        .collect();

    for user_corpus in user_cfg.corpora {
        match positions.get(&user_corpus.name) {
            Some(&i) => corpora[i] = user_corpus,
            None => corpora.push(user_corpus),
        }
    }

    let mut analysis = default_config.analysis;
    if let Some(order) = user_cfg.analysis.default_order {
        debug!("Overriding default order with user value: {}", order);
        analysis.default_order = Some(order);
    }
    if let Some(top_k) = user_cfg.analysis.top_k {
        debug!("Overriding top_k with user value: {}", top_k);
        analysis.top_k = Some(top_k);
    }
    if let Some(max_chars) = user_cfg.analysis.max_chars {
        debug!("Overriding max_chars with user value: {}", max_chars);
        analysis.max_chars = Some(max_chars);
    }

    AnalyzerConfig { corpora, analysis }
}

/// Checks names, alphabet sizes and analysis bounds of a single file.
fn validate_config(config: &AnalyzerConfig) -> Result<()> {
    let mut names = HashSet::new();
    let mut errors = Vec::new();

    for corpus in &config.corpora {
        if corpus.name.is_empty() {
            errors.push("A corpus has an empty `name` field.".to_string());
        } else if !names.insert(corpus.name.as_str()) {
            errors.push(format!("Duplicate corpus name found: '{}'.", corpus.name));
        }
        if corpus.path.as_os_str().is_empty() {
            errors.push(format!("Corpus '{}' has an empty `path` field.", corpus.name));
        }
        if corpus.alphabet_size == 0 {
            errors.push(format!("Corpus '{}' has an alphabet size of zero.", corpus.name));
        }
    }

    if let Some(order) = config.analysis.default_order {
        if !(1..=MAX_ORDER).contains(&order) {
            errors.push(format!("`default_order` must be between 1 and {}, got {}.", MAX_ORDER, order));
        }
    }
    if config.analysis.top_k == Some(0) {
        errors.push("`top_k` must be at least 1.".to_string());
    }
    if config.analysis.max_chars == Some(0) {
        errors.push("`max_chars` must be at least 1.".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Configuration validation failed:\n{}", errors.join("\n")))
    }
}
