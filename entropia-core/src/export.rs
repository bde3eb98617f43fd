//! export.rs - Writes frequency tables to CSV.
//!
//! The file is written to a `.tmp` sibling first and renamed into place once
//! every row is on disk. On failure the temporary file is removed, so the
//! target path either holds a complete table or is left untouched.
//!
//! License: MIT OR APACHE 2.0

use log::{info, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::EntropiaError;
use crate::report::NgramRow;

/// Column names of the export, in order.
pub const CSV_HEADERS: [&str; 3] = ["ngram", "count", "freq"];
const EXPORT_TMP_SUFFIX: &str = ".tmp";

/// Writes `rows` as CSV to `path` and returns the number of data rows.
///
/// Rows are written in the order given (the analyzer hands them over in
/// descending-count order).
pub fn write_frequency_csv(path: &Path, rows: &[NgramRow]) -> Result<usize, EntropiaError> {
    if rows.is_empty() {
        warn!("Exporting an empty frequency table to {}", path.display());
    }

    let tmp_path = temp_path_for(path);
    let export_error = |source: std::io::Error| EntropiaError::Export {
        path: path.to_path_buf(),
        source,
    };

    if let Err(source) = write_rows(&tmp_path, rows) {
        let _ = fs::remove_file(&tmp_path);
        return Err(export_error(source));
    }

    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(export_error(source));
    }

    info!("Exported {} rows to {}", rows.len(), path.display());
    Ok(rows.len())
}

fn write_rows(path: &Path, rows: &[NgramRow]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", CSV_HEADERS.join(","))?;
    for row in rows {
        writeln!(writer, "{},{},{}", row.ngram, row.count, row.probability)?;
    }

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(EXPORT_TMP_SUFFIX);
    path.with_file_name(name)
}
