//! Module for managing the application's command-line interface (CLI) theme.
//!
//! Users can recolor the parts of the menu and reports through a YAML file
//! mapping theme entries to 16-color ANSI names. Entries missing from the
//! file keep their default color.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use anyhow::{Context, Result};
use comfy_table::Color as TableColor;
use owo_colors::AnsiColors;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Menu banners and report titles.
    Header,
    /// Successful operation messages.
    Success,
    /// General informational messages.
    Info,
    /// Warning messages.
    Warn,
    /// Error messages.
    Error,
    /// Input prompts.
    Prompt,
    /// Column headers of the n-gram table.
    TableHeader,
    /// N-gram text in tables.
    Ngram,
    /// Metric names in reports.
    MetricLabel,
    /// Metric values in reports.
    MetricValue,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 10] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::Prompt,
        ThemeEntry::TableHeader,
        ThemeEntry::Ngram,
        ThemeEntry::MetricLabel,
        ThemeEntry::MetricValue,
    ];
}

/// Each theme name with its `owo-colors` and `comfy-table` equivalents.
const NAMED_COLORS: [(&str, AnsiColors, TableColor); 16] = [
    ("black", AnsiColors::Black, TableColor::Black),
    ("red", AnsiColors::Red, TableColor::DarkRed),
    ("green", AnsiColors::Green, TableColor::DarkGreen),
    ("yellow", AnsiColors::Yellow, TableColor::DarkYellow),
    ("blue", AnsiColors::Blue, TableColor::DarkBlue),
    ("magenta", AnsiColors::Magenta, TableColor::DarkMagenta),
    ("cyan", AnsiColors::Cyan, TableColor::DarkCyan),
    ("white", AnsiColors::White, TableColor::Grey),
    ("brightblack", AnsiColors::BrightBlack, TableColor::DarkGrey),
    ("brightred", AnsiColors::BrightRed, TableColor::Red),
    ("brightgreen", AnsiColors::BrightGreen, TableColor::Green),
    ("brightyellow", AnsiColors::BrightYellow, TableColor::Yellow),
    ("brightblue", AnsiColors::BrightBlue, TableColor::Blue),
    ("brightmagenta", AnsiColors::BrightMagenta, TableColor::Magenta),
    ("brightcyan", AnsiColors::BrightCyan, TableColor::Cyan),
    ("brightwhite", AnsiColors::BrightWhite, TableColor::White),
];

fn lookup(name: &str) -> Option<&'static (&'static str, AnsiColors, TableColor)> {
    NAMED_COLORS
        .iter()
        .find(|(known, _, _)| known.eq_ignore_ascii_case(name))
}

/// A 16-color ANSI name as written in a theme file (`red`, `brightcyan`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Named(String),
}

/// Error for a color name outside the 16 ANSI names.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError(String);

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = NAMED_COLORS.iter().map(|(name, _, _)| *name).collect();
        write!(f, "Unknown theme color '{}'; expected one of: {}.", self.0, names.join(", "))
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match lookup(s) {
            Some(_) => Ok(ThemeColor::Named(s.to_lowercase())),
            None => Err(ParseThemeColorError(s.to_string())),
        }
    }
}

impl ThemeColor {
    fn named(name: &str) -> Self {
        ThemeColor::Named(name.to_string())
    }

    /// The `comfy-table` color for this name, used for styled table cells.
    pub fn to_table_color(&self) -> TableColor {
        match self {
            ThemeColor::Named(name) => lookup(name).map_or(TableColor::Grey, |(_, _, cell)| *cell),
        }
    }

    /// The `owo_colors` color for this name; unknown names render white.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => lookup(name).map_or(AnsiColors::White, |(_, ansi, _)| *ansi),
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        ThemeStyle::load_from_file(path)
    } else {
        Ok(ThemeStyle::default_theme_map())
    }
}

impl ThemeStyle {
    /// Loads a theme from a YAML file and fills unset entries from the default theme.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;
        for (entry, style) in &custom {
            if let Some(ThemeColor::Named(name)) = &style.fg {
                name.parse::<ThemeColor>()
                    .with_context(|| format!("Invalid color for {:?} in {}", entry, path.display()))?;
            }
        }

        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// Returns the default theme map.
    pub fn default_theme_map() -> ThemeMap {
        let defaults = [
            (ThemeEntry::Header, "brightcyan"),
            (ThemeEntry::Success, "green"),
            (ThemeEntry::Info, "white"),
            (ThemeEntry::Warn, "yellow"),
            (ThemeEntry::Error, "red"),
            (ThemeEntry::Prompt, "brightwhite"),
            (ThemeEntry::TableHeader, "cyan"),
            (ThemeEntry::Ngram, "brightyellow"),
            (ThemeEntry::MetricLabel, "white"),
            (ThemeEntry::MetricValue, "brightgreen"),
        ];

        defaults
            .into_iter()
            .map(|(entry, color)| (entry, ThemeStyle { fg: Some(ThemeColor::named(color)) }))
            .collect()
    }
}

/// Foreground color for `entry`, white if the map has no style for it.
pub fn color_for(entry: ThemeEntry, theme: &ThemeMap) -> AnsiColors {
    theme
        .get(&entry)
        .and_then(|style| style.fg.as_ref())
        .map(ThemeColor::to_ansi_color)
        .unwrap_or(AnsiColors::White)
}

/// Table cell color for `entry`, grey if the map has no style for it.
pub fn table_color_for(entry: ThemeEntry, theme: &ThemeMap) -> TableColor {
    theme
        .get(&entry)
        .and_then(|style| style.fg.as_ref())
        .map(ThemeColor::to_table_color)
        .unwrap_or(TableColor::Grey)
}
