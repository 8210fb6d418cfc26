//! CSV export of the academic record

use crate::core::error::Result;
use crate::core::models::{AcademicRecord, Assessment, Module, Year};
use logger::info;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Column headers, in output order
pub const CSV_HEADERS: [&str; 8] = [
    "Year",
    "Module",
    "ECTS",
    "Moderated Score",
    "Assessment",
    "Due Date",
    "Weight",
    "Grade",
];

/// Format a number for a CSV cell without a trailing `.0` on whole values
fn number_cell(value: f64) -> String {
    if value.is_finite() && value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn optional_cell(value: Option<f64>) -> String {
    value.map(number_cell).unwrap_or_default()
}

fn row(year: &Year, module: &Module, assessment: Option<&Assessment>) -> [String; 8] {
    [
        year.name.clone(),
        module.name.clone(),
        number_cell(module.ects),
        optional_cell(module.moderated_score),
        assessment.map(|a| a.title.clone()).unwrap_or_default(),
        assessment
            .and_then(|a| a.due_date.clone())
            .unwrap_or_default(),
        assessment.map(|a| number_cell(a.weight)).unwrap_or_default(),
        assessment.map(|a| optional_cell(a.grade)).unwrap_or_default(),
    ]
}

/// Write the record as CSV: one row per (year, module, assessment).
///
/// A module without assessments still gets one row with the assessment
/// columns left empty. Returns the number of data rows written.
///
/// # Errors
/// Returns an error if writing fails.
pub fn export_csv<W: Write>(record: &AcademicRecord, writer: W) -> Result<usize> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADERS)?;

    let mut rows = 0;
    for year in &record.years {
        for module in &year.modules {
            if module.assessments.is_empty() {
                csv.write_record(row(year, module, None))?;
                rows += 1;
                continue;
            }
            for assessment in &module.assessments {
                csv.write_record(row(year, module, Some(assessment)))?;
                rows += 1;
            }
        }
    }

    csv.flush()?;
    Ok(rows)
}

/// Export the record to a CSV file, creating parent directories as needed.
///
/// # Errors
/// Returns an error if the directory or file cannot be written.
pub fn export_csv_file(record: &AcademicRecord, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = fs::File::create(path)?;
    let rows = export_csv(record, file)?;
    info!("Exported {rows} rows to {}", path.display());
    Ok(rows)
}
