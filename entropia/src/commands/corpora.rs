//! The `corpora` subcommand: lists the configured corpora.

use anyhow::{Context, Result};
use comfy_table::{presets, Table};

use entropia_core::AnalyzerConfig;

use crate::commands::print_stdout;

pub fn corpora_table(config: &AnalyzerConfig) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_header(vec!["Name", "Label", "Path", "Alphabet", "Compare with", "Available"]);

    for spec in &config.corpora {
        table.add_row(vec![
            spec.name.clone(),
            spec.display_name().to_string(),
            spec.path.display().to_string(),
            spec.alphabet_size.to_string(),
            spec.compare_with.clone().unwrap_or_else(|| "-".to_string()),
            if spec.path.is_file() { "yes" } else { "no" }.to_string(),
        ]);
    }
    table
}

pub fn run_corpora(config: &AnalyzerConfig) -> Result<()> {
    print_stdout(&format!("{}\n", corpora_table(config))).context("Failed to write corpus list")
}
