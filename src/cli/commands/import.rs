//! Import command handler

use super::{confirm, fail, open_record, save};
use grade_tracker::config::Config;
use grade_tracker::core::storage;
use logger::info;
use std::path::Path;

/// Replace the stored record with the contents of a JSON file
pub fn run(file: &Path, yes: bool, config: &Config) {
    let imported = storage::import_record(file).unwrap_or_else(|e| fail(e));
    let (mut store, current) = open_record(config);

    let modules: usize = imported.years.iter().map(|y| y.modules.len()).sum();
    let assessments = imported.assessments().count();
    println!(
        "{} contains {} year(s), {modules} module(s), {assessments} assessment(s)",
        file.display(),
        imported.years.len()
    );

    if !current.is_empty() && !yes && !confirm("Replace the stored record?") {
        println!("✗ Import cancelled");
        return;
    }

    save(&mut store, &imported);
    info!("Imported record from {}", file.display());
    println!("✓ Imported {}", file.display());
}
