//! The interactive menu.
//!
//! Reads choices line by line from any `BufRead` and writes to any `Write`,
//! so the binary wires it to stdin/stdout and tests drive it from memory.
//! Every recoverable failure (missing corpus, bad input, failed export) is
//! reported inline and the menu is shown again. End of input ends the session.

use anyhow::Result;
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use entropia_core::headless::request_for_path;
use entropia_core::{write_frequency_csv, AnalyzerConfig, CorpusSpec, StatisticsEngine, MAX_ORDER};

use crate::ui::output_format::{self, paint};
use crate::ui::report_table::render_report;
use crate::ui::theme::{ThemeEntry, ThemeMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// State of one interactive session.
pub struct MenuSession<'a, R: BufRead, W: Write> {
    engine: &'a dyn StatisticsEngine,
    config: &'a AnalyzerConfig,
    theme: &'a ThemeMap,
    colors: bool,
    input: R,
    output: W,
    current: Option<CorpusSpec>,
    order: usize,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(
        engine: &'a dyn StatisticsEngine,
        config: &'a AnalyzerConfig,
        theme: &'a ThemeMap,
        colors: bool,
        input: R,
        output: W,
    ) -> Self {
        Self {
            engine,
            config,
            theme,
            colors,
            input,
            output,
            current: None,
            order: config.analysis.default_order(),
        }
    }

    /// The selected corpus, if any.
    pub fn current_corpus(&self) -> Option<&CorpusSpec> {
        self.current.as_ref()
    }

    /// The selected n-gram order.
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.say(ThemeEntry::Header, "Starting EntropiaCheck...")?;
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an option [1-5]: ")? else {
                debug!("Menu input closed.");
                writeln!(self.output)?;
                return Ok(());
            };

            let step = match choice.as_str() {
                "1" => self.select_corpus()?,
                "2" => self.choose_order()?,
                "3" => self.show_results()?,
                "4" => self.export_csv()?,
                "5" => {
                    self.say(ThemeEntry::Success, "Goodbye!")?;
                    return Ok(());
                }
                _ => {
                    self.say(ThemeEntry::Error, "Invalid option.")?;
                    Step::Continue
                }
            };

            if step == Step::Exit || self.prompt("Press Enter to continue...")?.is_none() {
                writeln!(self.output)?;
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let corpus = match &self.current {
            Some(spec) => format!("{} ({})", spec.display_name(), spec.path.display()),
            None => "none selected".to_string(),
        };
        writeln!(self.output)?;
        self.say(ThemeEntry::Header, "=== EntropiaCheck: entropy and probabilities ===")?;
        self.say(ThemeEntry::Info, &format!("Current corpus: {}", corpus))?;
        self.say(ThemeEntry::Info, &format!("Analysis: {}-grams", self.order))?;
        writeln!(self.output, "1) Select corpus")?;
        writeln!(self.output, "2) Choose n-gram order (1-{})", MAX_ORDER)?;
        writeln!(self.output, "3) Show results")?;
        writeln!(self.output, "4) Export CSV")?;
        writeln!(self.output, "5) Exit")
    }

    fn select_corpus(&mut self) -> io::Result<Step> {
        if self.config.corpora.is_empty() {
            self.say(ThemeEntry::Warn, "No corpora configured.")?;
            return Ok(Step::Continue);
        }

        let listing = self
            .config
            .corpora
            .iter()
            .enumerate()
            .map(|(i, spec)| format!("{}={}", i + 1, spec.display_name()))
            .collect::<Vec<_>>()
            .join(", ");
        let Some(choice) = self.prompt(&format!("Select corpus ({}): ", listing))? else {
            return Ok(Step::Exit);
        };

        let config = self.config;
        let selected = choice
            .parse::<usize>()
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| config.corpora.get(i))
            .or_else(|| config.corpus(&choice));
        let Some(spec) = selected else {
            self.say(ThemeEntry::Error, "Invalid option.")?;
            return Ok(Step::Continue);
        };

        match self.engine.load(&spec.path) {
            Ok(corpus) => {
                info!("Selected corpus {} ({} symbols)", spec.name, corpus.text.len());
                self.current = Some(spec.clone());
                self.say(
                    ThemeEntry::Success,
                    &format!("Corpus loaded: {} ({})", spec.display_name(), spec.path.display()),
                )?;
            }
            Err(e) => self.error(&e.to_string())?,
        }
        Ok(Step::Continue)
    }

    fn choose_order(&mut self) -> io::Result<Step> {
        let Some(choice) = self.prompt(&format!("Select n for n-grams (1-{}): ", MAX_ORDER))? else {
            return Ok(Step::Exit);
        };
        match choice.parse::<usize>() {
            Ok(n) if (1..=MAX_ORDER).contains(&n) => {
                self.order = n;
                self.say(ThemeEntry::Success, &format!("Analysis set to {}-grams.", n))?;
            }
            _ => self.say(ThemeEntry::Error, "Invalid option.")?,
        }
        Ok(Step::Continue)
    }

    fn selected_path(&mut self) -> io::Result<Option<PathBuf>> {
        match &self.current {
            Some(spec) => Ok(Some(spec.path.clone())),
            None => {
                self.say(ThemeEntry::Warn, "Select a corpus first.")?;
                Ok(None)
            }
        }
    }

    fn show_results(&mut self) -> io::Result<Step> {
        let Some(path) = self.selected_path()? else {
            return Ok(Step::Continue);
        };

        let request = request_for_path(self.config, &path, self.order);
        match self.engine.analyze(&request) {
            Ok(report) => {
                writeln!(self.output)?;
                let text = render_report(&report, self.theme, self.colors);
                self.output.write_all(text.as_bytes())?;
            }
            Err(e) => self.error(&e.to_string())?,
        }
        Ok(Step::Continue)
    }

    fn export_csv(&mut self) -> io::Result<Step> {
        let Some(path) = self.selected_path()? else {
            return Ok(Step::Continue);
        };

        let rows = match self.engine.frequency_rows(&path, self.order) {
            Ok(rows) => rows,
            Err(e) => {
                self.error(&e.to_string())?;
                return Ok(Step::Continue);
            }
        };

        let Some(filename) = self.prompt("Output CSV file name (e.g. out.csv): ")? else {
            return Ok(Step::Exit);
        };
        if filename.is_empty() {
            self.say(ThemeEntry::Error, "No file name given.")?;
            return Ok(Step::Continue);
        }

        let target = PathBuf::from(filename);
        match write_frequency_csv(&target, &rows) {
            Ok(_) => self.say(ThemeEntry::Success, &format!("CSV saved to {}", target.display()))?,
            Err(e) => self.error(&format!("Failed to save CSV: {}", e))?,
        }
        Ok(Step::Continue)
    }

    /// Prints `text` without a newline and reads one trimmed line.
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", paint(text, ThemeEntry::Prompt, self.theme, self.colors))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, entry: ThemeEntry, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", paint(text, entry, self.theme, self.colors))
    }

    fn error(&mut self, text: &str) -> io::Result<()> {
        output_format::print_error_message(&mut self.output, text, self.theme, self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use entropia_core::CorpusAnalyzer;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn spec(name: &str, path: PathBuf) -> CorpusSpec {
        CorpusSpec {
            name: name.to_string(),
            label: None,
            path,
            alphabet_size: 27,
            compare_with: None,
        }
    }

    fn session_output(config: &AnalyzerConfig, script: &str) -> (String, Option<CorpusSpec>, usize) {
        let engine = CorpusAnalyzer::default();
        let theme = ThemeStyle::default_theme_map();
        let mut session = MenuSession::new(&engine, config, &theme, false, Cursor::new(script.to_string()), Vec::new());
        session.run().unwrap();
        let current = session.current_corpus().cloned();
        let order = session.order();
        (String::from_utf8(session.into_output()).unwrap(), current, order)
    }

    #[test]
    fn exit_option_says_goodbye() {
        let config = AnalyzerConfig::default();
        let (out, _, _) = session_output(&config, "5\n");
        assert!(out.contains("1) Select corpus"));
        assert!(out.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn status_lines_use_info_color() {
        let config = AnalyzerConfig::default();
        let engine = CorpusAnalyzer::default();
        let mut theme = ThemeStyle::default_theme_map();
        theme.insert(ThemeEntry::Info, ThemeStyle { fg: Some("cyan".parse().unwrap()) });
        let mut session = MenuSession::new(&engine, &config, &theme, true, Cursor::new("5\n".to_string()), Vec::new());
        session.run().unwrap();
        let out = String::from_utf8(session.into_output()).unwrap();
        assert!(out.contains("\u{1b}[36mCurrent corpus: none selected"));
        assert!(out.contains("\u{1b}[36mAnalysis: 1-grams"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let config = AnalyzerConfig::default();
        let (out, current, _) = session_output(&config, "");
        assert!(out.contains("Choose an option"));
        assert!(current.is_none());
    }

    #[test]
    fn invalid_choices_are_reported() {
        let config = AnalyzerConfig::default();
        let (out, _, order) = session_output(&config, "9\n\n2\n7\n\n5\n");
        assert_eq!(out.matches("Invalid option.").count(), 2);
        assert_eq!(order, 1);
    }

    #[test]
    fn missing_corpus_is_reported_and_menu_continues() {
        let dir = TempDir::new().unwrap();
        let config = AnalyzerConfig {
            corpora: vec![spec("esp", dir.path().join("esp.txt"))],
            ..Default::default()
        };
        let (out, current, _) = session_output(&config, "1\n1\n\n5\n");
        assert!(out.contains("Error: File not found:"));
        assert!(out.contains("Goodbye!"));
        assert!(current.is_none());
    }

    #[test]
    fn results_require_a_corpus() {
        let config = AnalyzerConfig::default();
        let (out, _, _) = session_output(&config, "3\n\n4\n\n5\n");
        assert_eq!(out.matches("Select a corpus first.").count(), 2);
    }

    #[test]
    fn select_analyze_and_export() {
        let dir = TempDir::new().unwrap();
        let corpus = dir.path().join("mini.txt");
        fs::write(&corpus, "banana").unwrap();
        let csv = dir.path().join("out.csv");
        let config = AnalyzerConfig {
            corpora: vec![spec("mini", corpus)],
            ..Default::default()
        };

        let script = format!("1\nmini\n\n2\n2\n\n3\n\n4\n{}\n\n5\n", csv.display());
        let (out, current, order) = session_output(&config, &script);

        assert_eq!(current.map(|s| s.name), Some("mini".to_string()));
        assert_eq!(order, 2);
        assert!(out.contains("Corpus loaded: mini"));
        assert!(out.contains("Analysis set to 2-grams."));
        assert!(out.contains("Conditional entropy"));
        assert!(out.contains("CSV saved to"));

        let written = fs::read_to_string(&csv).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("ngram,count,freq"));
        assert_eq!(lines.next(), Some("an,2,0.4"));
    }
}
