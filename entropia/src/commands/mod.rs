//! Implementations of the `entropia` subcommands.

pub mod analyze;
pub mod compare;
pub mod corpora;
pub mod export;
pub mod menu;

use std::io::{self, Write};
use std::path::PathBuf;

use entropia_core::{AnalyzerConfig, CorpusSpec};
use is_terminal::IsTerminal;

use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// A corpus argument resolved against the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCorpus {
    pub label: String,
    pub path: PathBuf,
}

/// Resolves a `NAME|FILE` argument: configured names win, anything else is
/// taken as a path.
pub fn resolve_corpus(config: &AnalyzerConfig, arg: &str) -> ResolvedCorpus {
    match config.corpus(arg) {
        Some(spec) => from_spec(spec),
        None => {
            let path = PathBuf::from(arg);
            let label = config
                .corpus_for_path(&path)
                .map_or_else(|| arg.to_string(), |spec| spec.display_name().to_string());
            ResolvedCorpus { label, path }
        }
    }
}

fn from_spec(spec: &CorpusSpec) -> ResolvedCorpus {
    ResolvedCorpus {
        label: spec.display_name().to_string(),
        path: spec.path.clone(),
    }
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Writes `text` to stdout, flushing so piped output is complete.
pub fn print_stdout(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}
