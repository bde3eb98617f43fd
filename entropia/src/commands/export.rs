//! The `export` subcommand.

use anyhow::{Context, Result};

use entropia_core::{write_frequency_csv, AnalyzerConfig, StatisticsEngine};

use crate::cli::ExportCommand;
use crate::commands::{resolve_corpus, success_msg, warn_msg};
use crate::ui::theme::ThemeMap;

/// Writes the full frequency table and returns the number of data rows.
pub fn run_export(
    engine: &dyn StatisticsEngine,
    config: &AnalyzerConfig,
    cmd: &ExportCommand,
    theme: &ThemeMap,
) -> Result<usize> {
    let target = resolve_corpus(config, &cmd.corpus);
    let order = cmd.order.unwrap_or_else(|| config.analysis.default_order());

    let rows = engine
        .frequency_rows(&target.path, order)
        .with_context(|| format!("Failed to count {}-grams of '{}'", order, cmd.corpus))?;
    if rows.is_empty() {
        warn_msg(format!("{} has no {}-grams; writing the header only.", target.label, order), theme);
    }

    let written = write_frequency_csv(&cmd.output, &rows)?;
    success_msg(format!("CSV saved to {}", cmd.output.display()), theme);
    Ok(written)
}
