//! Export command handler

use super::{fail, open_record};
use grade_tracker::config::Config;
use grade_tracker::core::export;
use std::path::{Path, PathBuf};

/// Default file name inside the exports directory
const DEFAULT_FILE: &str = "grades.csv";

/// Write the record as CSV
pub fn run(output: Option<&Path>, config: &Config) {
    let path: PathBuf =
        output.map_or_else(|| config.exports_dir().join(DEFAULT_FILE), Path::to_path_buf);
    let (_, record) = open_record(config);

    match export::export_csv_file(&record, &path) {
        Ok(rows) => println!("✓ Exported {rows} rows to {}", path.display()),
        Err(e) => fail(format!("Failed to export CSV: {e}")),
    }
}
