//! The `compare` subcommand.

use anyhow::{Context, Result};

use entropia_core::{AnalyzerConfig, ComparisonReport, StatisticsEngine};

use crate::cli::CompareCommand;
use crate::commands::{print_stdout, resolve_corpus};
use crate::ui::report_table::render_comparison;
use crate::ui::theme::ThemeMap;

/// Compares the two corpora named in `cmd`, labelling the result with their
/// configured names where available.
pub fn build_comparison(
    engine: &dyn StatisticsEngine,
    config: &AnalyzerConfig,
    cmd: &CompareCommand,
) -> Result<ComparisonReport> {
    let left = resolve_corpus(config, &cmd.left);
    let right = resolve_corpus(config, &cmd.right);

    let mut report = engine
        .compare(&left.path, &right.path, cmd.order)
        .with_context(|| format!("Failed to compare '{}' and '{}'", cmd.left, cmd.right))?;
    report.left = left.label;
    report.right = right.label;
    Ok(report)
}

pub fn run_compare(
    engine: &dyn StatisticsEngine,
    config: &AnalyzerConfig,
    cmd: &CompareCommand,
    theme: &ThemeMap,
    colors: bool,
) -> Result<()> {
    let report = build_comparison(engine, config, cmd)?;
    let text = if cmd.json {
        let mut json = serde_json::to_string_pretty(&report).context("Failed to serialize comparison")?;
        json.push('\n');
        json
    } else {
        render_comparison(&report, theme, colors)
    };
    print_stdout(&text).context("Failed to write comparison")
}
