//! The `analyze` subcommand: one report, printed as text or JSON.

use anyhow::{Context, Result};
use log::info;

use entropia_core::headless::request_for_path;
use entropia_core::{AnalysisReport, AnalyzerConfig, StatisticsEngine};

use crate::cli::AnalyzeCommand;
use crate::commands::{print_stdout, resolve_corpus, warn_msg};
use crate::ui::report_table::render_report;
use crate::ui::theme::ThemeMap;

fn effective_order(config: &AnalyzerConfig, cmd: &AnalyzeCommand) -> usize {
    cmd.order.unwrap_or_else(|| config.analysis.default_order())
}

/// Runs the analysis described by `cmd` and returns the report.
pub fn build_report(
    engine: &dyn StatisticsEngine,
    config: &AnalyzerConfig,
    cmd: &AnalyzeCommand,
) -> Result<AnalysisReport> {
    let target = resolve_corpus(config, &cmd.corpus);
    let order = effective_order(config, cmd);

    let mut request = request_for_path(config, &target.path, order);
    request.label = Some(target.label.clone());
    if let Some(top) = cmd.top {
        request.top_k = top;
    }
    if let Some(other) = &cmd.compare {
        let partner = resolve_corpus(config, other);
        request.compare_with = Some((partner.label, partner.path));
    }

    info!("Analyzing {} at n = {}", target.path.display(), order);
    engine
        .analyze(&request)
        .with_context(|| format!("Failed to analyze corpus '{}'", cmd.corpus))
}

pub fn run_analyze(
    engine: &dyn StatisticsEngine,
    config: &AnalyzerConfig,
    cmd: &AnalyzeCommand,
    theme: &ThemeMap,
    colors: bool,
) -> Result<()> {
    let order = effective_order(config, cmd);
    if let (Some(other), true) = (&cmd.compare, order != 1) {
        warn_msg(
            format!("--compare {} only applies to unigram reports; ignored for n = {}.", other, order),
            theme,
        );
    }
    let report = build_report(engine, config, cmd)?;
    let text = if cmd.json {
        let mut json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        json.push('\n');
        json
    } else {
        render_report(&report, theme, colors)
    };
    print_stdout(&text).context("Failed to write report")
}
