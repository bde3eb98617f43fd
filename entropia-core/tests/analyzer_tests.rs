// entropia-core/tests/analyzer_tests.rs
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use entropia_core::{
    AnalysisRequest, ComparisonOutcome, CorpusAnalyzer, EntropiaError, Metric, StatisticsEngine,
};

const SPANISH: &str = "En un lugar de la Mancha, de cuyo nombre no quiero acordarme, \
no ha mucho tiempo que vivía un hidalgo de los de lanza en astillero, adarga antigua, \
rocín flaco y galgo corredor. Una olla de algo más vaca que carnero, salpicón las más noches.";

const ENGLISH: &str = "It was the best of times, it was the worst of times, it was the age of \
wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of incredulity.";

fn write_corpus(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn request(path: &Path, order: usize) -> AnalysisRequest {
    AnalysisRequest {
        corpus: path.to_path_buf(),
        label: Some("test".to_string()),
        order,
        top_k: 20,
        alphabet_size: 27,
        compare_with: None,
    }
}

#[test_log::test]
fn test_missing_corpus_is_not_found() {
    let analyzer = CorpusAnalyzer::default();
    let err = analyzer.load(Path::new("does-not-exist/esp.txt")).unwrap_err();
    assert!(err.is_not_found());

    let err = analyzer.analyze(&request(Path::new("does-not-exist/esp.txt"), 1)).unwrap_err();
    assert!(matches!(err, EntropiaError::NotFound { .. }));
}

#[test_log::test]
fn test_cached_corpus_survives_file_removal() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_corpus(&dir, "esp.txt", SPANISH);
    let analyzer = CorpusAnalyzer::default();

    let first = analyzer.load(&path)?;
    fs::remove_file(&path)?;
    let second = analyzer.load(&path)?;

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(analyzer.cached_corpora(), 1);
    Ok(())
}

#[test]
fn test_corpus_change_is_not_observed() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_corpus(&dir, "eng.txt", "first version");
    let analyzer = CorpusAnalyzer::default();

    let before = analyzer.load(&path)?;
    fs::write(&path, "something else entirely")?;
    let after = analyzer.load(&path)?;
    assert_eq!(before.text.as_str(), after.text.as_str());
    assert_eq!(after.text.as_str(), "firstversion");
    Ok(())
}

#[test]
fn test_unigram_report() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_corpus(&dir, "esp.txt", SPANISH);
    let analyzer = CorpusAnalyzer::default();

    let report = analyzer.analyze(&request(&path, 1))?;
    let corpus = analyzer.load(&path)?;

    assert_eq!(report.order, 1);
    assert_eq!(report.symbols, corpus.text.len());
    assert_eq!(report.total_ngrams as usize, corpus.text.len());
    assert!(report.top.len() <= 20);
    assert!(report.top.windows(2).all(|w| w[0].count >= w[1].count));
    assert!(report.entropy > 3.0 && report.entropy < report.uniform_entropy);
    assert!((report.uniform_entropy - 27f64.log2()).abs() < 1e-12);
    assert!((report.redundancy - (report.uniform_entropy - report.entropy)).abs() < 1e-12);
    assert!(matches!(report.zipf_alpha, Some(Metric::Computed { value }) if value > 0.0));
    assert!(report.conditional.is_none());
    assert!(report.comparison.is_none());
    Ok(())
}

#[test]
fn test_bigram_report_has_conditional_entropy() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_corpus(&dir, "eng.txt", ENGLISH);
    let analyzer = CorpusAnalyzer::default();

    let unigram = analyzer.analyze(&request(&path, 1))?;
    let bigram = analyzer.analyze(&request(&path, 2))?;
    let conditional = bigram.conditional.clone().expect("conditional entropy for n = 2");

    assert!(bigram.zipf_alpha.is_none());
    assert!((conditional.theoretical - unigram.entropy).abs() < 1e-12);
    assert!((conditional.practical - (bigram.entropy - unigram.entropy)).abs() < 1e-12);
    assert!((conditional.redundancy - (conditional.theoretical - conditional.practical)).abs() < 1e-12);
    assert_eq!(analyzer.cached_tables(), 2);
    Ok(())
}

#[test]
fn test_comparison_between_corpora() -> Result<()> {
    let dir = TempDir::new()?;
    let esp = write_corpus(&dir, "esp.txt", SPANISH);
    let eng = write_corpus(&dir, "eng.txt", ENGLISH);
    let analyzer = CorpusAnalyzer::default();

    let mut req = request(&esp, 1);
    req.compare_with = Some(("English".to_string(), eng.clone()));
    let report = analyzer.analyze(&req)?;

    match report.comparison {
        Some(ComparisonOutcome::Compared(cmp)) => {
            assert_eq!(cmp.left, "test");
            assert_eq!(cmp.right, "English");
            assert!((cmp.left_entropy - report.entropy).abs() < 1e-12);
            assert!(cmp.kl_left_right > 0.0);
            assert!(cmp.kl_right_left > 0.0);
            assert!(cmp.js > 0.0 && cmp.js <= 1.0);
        }
        other => panic!("expected a comparison, got {:?}", other),
    }

    let direct = analyzer.compare(&esp, &eng, 2)?;
    assert_eq!(direct.order, 2);
    assert!((direct.js - analyzer.compare(&eng, &esp, 2)?.js).abs() < 1e-12);
    Ok(())
}

#[test]
fn test_missing_partner_does_not_fail_report() -> Result<()> {
    let dir = TempDir::new()?;
    let esp = write_corpus(&dir, "esp.txt", SPANISH);
    let analyzer = CorpusAnalyzer::default();

    let mut req = request(&esp, 1);
    req.compare_with = Some(("English".to_string(), dir.path().join("eng.txt")));
    let report = analyzer.analyze(&req)?;

    match report.comparison {
        Some(ComparisonOutcome::Unavailable { partner, reason }) => {
            assert_eq!(partner, "English");
            assert!(reason.starts_with("File not found"));
        }
        other => panic!("expected an unavailable comparison, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_short_corpus_reports_insufficient_data() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_corpus(&dir, "tiny.txt", "ab!");
    let analyzer = CorpusAnalyzer::default();

    let err = analyzer.analyze(&request(&path, 3)).unwrap_err();
    assert!(matches!(err, EntropiaError::InsufficientData { found: 0, .. }));

    // A single distinct symbol still yields entropy but no Zipf fit.
    let mono = write_corpus(&dir, "mono.txt", "aaaa");
    let report = analyzer.analyze(&request(&mono, 1))?;
    assert_eq!(report.entropy, 0.0);
    assert!(matches!(report.zipf_alpha, Some(Metric::Skipped { .. })));
    Ok(())
}

#[test]
fn test_frequency_rows_cover_whole_table() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_corpus(&dir, "eng.txt", ENGLISH);
    let analyzer = CorpusAnalyzer::default();

    let rows = analyzer.frequency_rows(&path, 2)?;
    let corpus = analyzer.load(&path)?;
    let total: u64 = rows.iter().map(|r| r.count).sum();
    let probability: f64 = rows.iter().map(|r| r.probability).sum();

    assert_eq!(total as usize, corpus.text.len() - 1);
    assert!((probability - 1.0).abs() < 1e-9);
    assert_eq!(rows[0].rank, 1);
    assert!(rows.windows(2).all(|w| w[0].count > w[1].count
        || (w[0].count == w[1].count && w[0].ngram < w[1].ngram)));
    Ok(())
}
