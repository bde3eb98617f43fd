//! Renders analysis and comparison reports as terminal text.
//!
//! The n-gram table uses `comfy-table`; metric lines are `label: value`
//! pairs so they stay readable when piped.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use std::fmt::Write as _;

use entropia_core::{AnalysisReport, ComparisonOutcome, ComparisonReport, Metric, NgramRow};

use crate::ui::output_format::paint;
use crate::ui::theme::{table_color_for, ThemeEntry, ThemeMap};

/// Builds the ranked n-gram table. With `colors` set, the header and n-gram
/// cells take their `TableHeader` and `Ngram` theme colors.
pub fn ngram_table(rows: &[NgramRow], order: usize, theme: &ThemeMap, colors: bool) -> Table {
    let styled = |cell: Cell, entry: ThemeEntry| {
        if colors {
            cell.fg(table_color_for(entry, theme))
        } else {
            cell
        }
    };

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if colors {
        table.enforce_styling();
    }
    table.set_header(
        ["Rank".to_string(), format!("{}-gram", order), "Count".to_string(), "Freq".to_string()]
            .into_iter()
            .map(|title| styled(Cell::new(title), ThemeEntry::TableHeader)),
    );

    for row in rows {
        table.add_row(vec![
            Cell::new(row.rank).set_alignment(CellAlignment::Right),
            styled(Cell::new(&row.ngram), ThemeEntry::Ngram),
            Cell::new(row.count).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}%", row.percentage())).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

struct Lines<'a> {
    out: String,
    theme: &'a ThemeMap,
    colors: bool,
}

impl<'a> Lines<'a> {
    fn new(theme: &'a ThemeMap, colors: bool) -> Self {
        Self { out: String::new(), theme, colors }
    }

    fn header(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", paint(text, ThemeEntry::Header, self.theme, self.colors));
    }

    fn metric(&mut self, label: &str, value: &str) {
        let _ = writeln!(
            self.out,
            "  {} {}",
            paint(&format!("{}:", label), ThemeEntry::MetricLabel, self.theme, self.colors),
            paint(value, ThemeEntry::MetricValue, self.theme, self.colors),
        );
    }

    fn note(&mut self, text: &str, entry: ThemeEntry) {
        let _ = writeln!(self.out, "  {}", paint(text, entry, self.theme, self.colors));
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }
}

fn bits(value: f64) -> String {
    format!("{:.4} bits", value)
}

fn comparison_lines(lines: &mut Lines<'_>, report: &ComparisonReport) {
    lines.metric(&format!("H{} {}", report.order, report.left), &bits(report.left_entropy));
    lines.metric(&format!("H{} {}", report.order, report.right), &bits(report.right_entropy));
    lines.metric(&format!("KL({} || {})", report.left, report.right), &bits(report.kl_left_right));
    lines.metric(&format!("KL({} || {})", report.right, report.left), &bits(report.kl_right_left));
    lines.metric(&format!("JS({}, {})", report.left, report.right), &bits(report.js));
}

/// Full text rendering of an analysis report.
pub fn render_report(report: &AnalysisReport, theme: &ThemeMap, colors: bool) -> String {
    let mut lines = Lines::new(theme, colors);
    let n = report.order;

    lines.header(&format!(
        "Corpus: {} (n = {}, {} symbols, {} {}-grams, {} distinct)",
        report.corpus, n, report.symbols, report.total_ngrams, n, report.distinct_ngrams
    ));
    lines.blank();
    let _ = writeln!(lines.out, "Top {} {}-grams:", report.top.len(), n);
    let _ = writeln!(lines.out, "{}", ngram_table(&report.top, n, theme, colors));
    lines.blank();

    lines.header("Entropy");
    lines.metric(&format!("H{}", n), &bits(report.entropy));
    lines.metric("Uniform entropy", &bits(report.uniform_entropy));
    lines.metric("Redundancy", &bits(report.redundancy));

    if let Some(zipf) = &report.zipf_alpha {
        match zipf {
            Metric::Computed { value } => lines.metric("Zipf alpha", &format!("{:.4}", value)),
            Metric::Skipped { reason } => {
                lines.note(&format!("Zipf alpha not computed: {}", reason), ThemeEntry::Warn)
            }
        }
    }

    if let Some(conditional) = &report.conditional {
        lines.blank();
        lines.header("Conditional entropy");
        lines.metric(&format!("Practical H(X{}|X1..X{})", n, n - 1), &bits(conditional.practical));
        lines.metric("Theoretical (H1)", &bits(conditional.theoretical));
        lines.metric(&format!("Redundancy of {}-grams", n), &bits(conditional.redundancy));
    }

    if let Some(comparison) = &report.comparison {
        lines.blank();
        lines.header("Comparison");
        match comparison {
            ComparisonOutcome::Compared(cmp) => comparison_lines(&mut lines, cmp),
            ComparisonOutcome::Unavailable { partner, reason } => lines.note(
                &format!("Could not load the other corpus ({}): {}", partner, reason),
                ThemeEntry::Warn,
            ),
        }
    }

    lines.out
}

/// Text rendering of a stand-alone comparison.
pub fn render_comparison(report: &ComparisonReport, theme: &ThemeMap, colors: bool) -> String {
    let mut lines = Lines::new(theme, colors);
    lines.header(&format!(
        "Comparison of {} and {} (n = {})",
        report.left, report.right, report.order
    ));
    comparison_lines(&mut lines, report);
    lines.out
}
