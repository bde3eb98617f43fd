//! This file defines the command-line interface (CLI) for the entropia application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use entropia_core::MAX_ORDER;

fn parse_order(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (1..=MAX_ORDER).contains(&n) {
        Ok(n)
    } else {
        Err(format!("n must be between 1 and {}", MAX_ORDER))
    }
}

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "entropia",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Entropy and probability analysis of text corpora",
    long_about = "Entropia computes n-gram frequencies, Shannon entropy, conditional entropy, Kullback-Leibler and Jensen-Shannon divergence and the Zipf exponent of natural-language corpora. Run without a subcommand to open the interactive menu.",
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML configuration merged over the built-in corpora.
    #[arg(long = "config", value_name = "FILE", global = true, env = "ENTROPIA_CONFIG", help = "Path to a custom configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run; defaults to the interactive menu.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// All available commands for the `entropia` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Opens the interactive menu (the default).
    #[command(about = "Open the interactive menu.")]
    Menu,

    /// Prints the report for one corpus.
    #[command(about = "Print the top n-grams and entropy metrics of a corpus.")]
    Analyze(AnalyzeCommand),

    /// Writes the full frequency table of a corpus to CSV.
    #[command(about = "Export the n-gram frequency table of a corpus to CSV.")]
    Export(ExportCommand),

    /// Compares the distributions of two corpora.
    #[command(about = "Compare two corpora: entropy, KL divergence both ways and JS divergence.")]
    Compare(CompareCommand),

    /// Lists configured corpora.
    #[command(about = "List the configured corpora.")]
    Corpora,
}

/// Arguments for the `analyze` command.
#[derive(Parser, Debug)]
pub struct AnalyzeCommand {
    /// A configured corpus name (e.g. "esp") or a file path.
    #[arg(long, short = 'c', value_name = "NAME|FILE", help = "Corpus name from the configuration, or a path to a text file.")]
    pub corpus: String,

    /// N-gram order.
    #[arg(short = 'n', long = "order", value_name = "N", value_parser = parse_order, help = "N-gram order (1-3). Defaults to the configured order.")]
    pub order: Option<usize>,

    /// Number of rows in the top table.
    #[arg(long = "top", value_name = "K", help = "Number of n-grams listed. Defaults to the configured top_k.")]
    pub top: Option<usize>,

    /// Corpus to compare against for unigram reports.
    #[arg(long = "compare", value_name = "NAME|FILE", help = "Compare against this corpus instead of the configured partner.")]
    pub compare: Option<String>,

    /// Print the report as JSON to stdout.
    #[arg(long = "json", help = "Print the report as JSON.")]
    pub json: bool,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportCommand {
    /// A configured corpus name or a file path.
    #[arg(long, short = 'c', value_name = "NAME|FILE", help = "Corpus name from the configuration, or a path to a text file.")]
    pub corpus: String,

    /// N-gram order.
    #[arg(short = 'n', long = "order", value_name = "N", value_parser = parse_order, help = "N-gram order (1-3). Defaults to the configured order.")]
    pub order: Option<usize>,

    /// Destination CSV file.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write the CSV table to this file.")]
    pub output: PathBuf,
}

/// Arguments for the `compare` command.
#[derive(Parser, Debug)]
pub struct CompareCommand {
    /// First corpus (name or path).
    #[arg(value_name = "LEFT")]
    pub left: String,

    /// Second corpus (name or path).
    #[arg(value_name = "RIGHT")]
    pub right: String,

    /// N-gram order.
    #[arg(short = 'n', long = "order", value_name = "N", value_parser = parse_order, default_value = "1", help = "N-gram order (1-3).")]
    pub order: usize,

    /// Print the comparison as JSON to stdout.
    #[arg(long = "json", help = "Print the comparison as JSON.")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_bounds() {
        assert_eq!(parse_order("1"), Ok(1));
        assert_eq!(parse_order("3"), Ok(3));
        assert!(parse_order("0").is_err());
        assert!(parse_order("4").is_err());
        assert!(parse_order("two").is_err());
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["entropia"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_analyze_args() {
        let cli = Cli::try_parse_from(["entropia", "-q", "analyze", "-c", "esp", "-n", "2", "--top", "5"]).unwrap();
        assert!(cli.quiet);
        match cli.command {
            Some(Commands::Analyze(cmd)) => {
                assert_eq!(cmd.corpus, "esp");
                assert_eq!(cmd.order, Some(2));
                assert_eq!(cmd.top, Some(5));
                assert!(!cmd.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
