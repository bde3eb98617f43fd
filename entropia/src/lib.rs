// entropia/src/lib.rs
//! # EntropiaCheck CLI
//!
//! Terminal front end for `entropia-core`: argument parsing, logging, the
//! interactive menu, the one-shot `analyze`, `export`, `compare` and
//! `corpora` subcommands, and report rendering.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::menu::MenuSession;
