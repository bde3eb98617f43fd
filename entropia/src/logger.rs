// entropia/src/logger.rs
//! Logger setup for the `entropia` binary.
//!
//! Logs go to stderr through `env_logger`, so menu output on stdout stays
//! readable. `RUST_LOG` is honored unless an explicit level is passed.

use log::LevelFilter;

/// Initializes the global logger. Safe to call more than once; later calls
/// are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(env_logger::Target::Stderr);
    let _ = builder.try_init();
}

/// Picks the log level from the CLI flags. `--quiet` wins over `--debug`.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
