// entropia/src/main.rs
//! EntropiaCheck entry point.
//!
//! Loads the configuration, builds the caching analyzer and dispatches to the
//! chosen subcommand, the interactive menu being the default.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::debug;
use std::io;
use std::path::PathBuf;

use entropia::cli::{Cli, Commands};
use entropia::commands::{analyze, compare, corpora, export, menu::MenuSession};
use entropia::logger;
use entropia::ui::theme::build_theme_map;
use entropia_core::{merge_config, AnalyzerConfig, CorpusAnalyzer};

/// Built-in corpora, overridden by `--config` or else by the first config
/// file found in the standard locations.
fn load_config(explicit: Option<&PathBuf>) -> Result<AnalyzerConfig> {
    let defaults = AnalyzerConfig::load_default()?;
    let user = match explicit {
        Some(path) => Some(
            AnalyzerConfig::load_from_file(path)
                .with_context(|| format!("Failed to load configuration '{}'", path.display()))?,
        ),
        None => AnalyzerConfig::discover()?,
    };
    let config = merge_config(defaults, user);
    config.check_partners()?;
    Ok(config)
}

fn main() -> Result<()> {
    // A `.env` next to the corpora may set ENTROPIA_CONFIG or RUST_LOG.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));

    let theme_map = build_theme_map(cli.theme.as_ref()).context("Theme error")?;
    let config = load_config(cli.config.as_ref())?;
    debug!("Using {} corpora", config.corpora.len());

    let engine = CorpusAnalyzer::from_config(&config);
    let stdout_colors = io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut session = MenuSession::new(
                &engine,
                &config,
                &theme_map,
                stdout_colors,
                stdin.lock(),
                io::stdout(),
            );
            session.run().context("Menu failure")?;
        }
        Commands::Analyze(cmd) => {
            analyze::run_analyze(&engine, &config, &cmd, &theme_map, stdout_colors)?;
        }
        Commands::Export(cmd) => {
            export::run_export(&engine, &config, &cmd, &theme_map)?;
        }
        Commands::Compare(cmd) => {
            compare::run_compare(&engine, &config, &cmd, &theme_map, stdout_colors)?;
        }
        Commands::Corpora => {
            corpora::run_corpora(&config)?;
        }
    }

    Ok(())
}
