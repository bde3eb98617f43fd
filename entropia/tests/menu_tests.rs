// entropia/tests/menu_tests.rs
//! Drives the interactive menu of the binary through stdin.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn menu_command(dir: &TempDir) -> Result<Command> {
    let config = dir.path().join("entropia.yaml");
    let yaml = format!(
        "corpora:\n  - name: esp\n    label: Spanish\n    path: {}\n    compare_with: eng\n",
        dir.path().join("esp.txt").display()
    );
    fs::write(&config, yaml)?;

    let mut cmd = Command::cargo_bin("entropia")?;
    cmd.current_dir(dir.path()).arg("-q").arg("--config").arg(&config);
    Ok(cmd)
}

#[test]
fn menu_is_the_default_command() -> Result<()> {
    let dir = TempDir::new()?;
    menu_command(&dir)?
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1) Select corpus"))
        .stdout(predicate::str::contains("Goodbye!"));
    Ok(())
}

#[test]
fn menu_recovers_from_missing_corpus() -> Result<()> {
    let dir = TempDir::new()?;
    menu_command(&dir)?
        .arg("menu")
        .write_stdin("1\n1\n\n3\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: File not found"))
        .stdout(predicate::str::contains("Select a corpus first."))
        .stdout(predicate::str::contains("Goodbye!"));
    Ok(())
}

#[test]
fn menu_shows_results_and_exports() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("esp.txt"), "El niño come pan y la niña canta.")?;

    menu_command(&dir)?
        .write_stdin("1\nesp\n\n3\n\n4\nfreq.csv\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Corpus loaded: Spanish"))
        .stdout(predicate::str::contains("H1:"))
        .stdout(predicate::str::contains("Could not load the other corpus (English)"))
        .stdout(predicate::str::contains("CSV saved to freq.csv"));

    let csv = fs::read_to_string(dir.path().join("freq.csv"))?;
    assert!(csv.starts_with("ngram,count,freq\na,"));
    assert!(csv.contains("\nñ,2,"));
    Ok(())
}

#[test]
fn menu_exits_on_end_of_input() -> Result<()> {
    let dir = TempDir::new()?;
    menu_command(&dir)?
        .write_stdin("2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis set to 3-grams."));
    Ok(())
}
