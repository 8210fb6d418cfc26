//! CLI command handlers for `gradetracker`.
//!
//! Each command is implemented in its own submodule. Handlers print `✓`/`✗`
//! status lines and exit non-zero when a command cannot complete.

pub mod assessment;
pub mod calendar;
pub mod config;
pub mod export;
pub mod import;
pub mod module;
pub mod summary;
pub mod target;
pub mod theme;
pub mod year;

use chrono::NaiveDate;
use grade_tracker::config::Config;
use grade_tracker::core::models::{assessment::DUE_DATE_FORMAT, AcademicRecord};
use grade_tracker::core::storage::{self, FileStore};
use logger::{debug, warn};
use std::fmt::Display;
use std::io::{self, Write};

/// Print an error and exit with status 1
pub fn fail(message: impl Display) -> ! {
    eprintln!("✗ {message}");
    std::process::exit(1);
}

/// Ask a y/n question on stdout; only `y` or `yes` counts as agreement.
pub fn confirm(prompt: &str) -> bool {
    print!("{prompt} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Open the configured store and load the record, exiting on failure
pub fn open_record(config: &Config) -> (FileStore, AcademicRecord) {
    let store = FileStore::new(config.data_dir());
    debug!("Using data directory {}", store.dir().display());
    match storage::load_record(&store) {
        Ok(record) => (store, record),
        Err(e) => fail(format!("Failed to load record: {e}")),
    }
}

/// Persist the record, exiting on failure
pub fn save(store: &mut FileStore, record: &AcademicRecord) {
    if let Err(e) = storage::save_record(store, record) {
        fail(format!("Failed to save record: {e}"));
    }
}

/// Reject non-finite numbers
pub fn finite(label: &str, value: f64) -> f64 {
    if !value.is_finite() {
        fail(format!("{label} must be a number, got {value}"));
    }
    value
}

/// Accept a percentage, warning when it falls outside 0-100
pub fn percent(label: &str, value: f64) -> f64 {
    let value = finite(label, value);
    if !(0.0..=100.0).contains(&value) {
        warn!("{label} {value} is outside 0-100; keeping it as entered");
    }
    value
}

/// Reject negative or non-finite credit weights
pub fn credits(value: f64) -> f64 {
    let value = finite("ECTS", value);
    if value < 0.0 {
        fail(format!("ECTS must not be negative, got {value}"));
    }
    value
}

/// Validate a `YYYY-MM-DD` due date and return it normalised
pub fn due_date(text: &str) -> String {
    match NaiveDate::parse_from_str(text.trim(), DUE_DATE_FORMAT) {
        Ok(date) => date.format(DUE_DATE_FORMAT).to_string(),
        Err(_) => fail(format!("Due date must be YYYY-MM-DD, got '{text}'")),
    }
}

/// Reject blank names
pub fn name(label: &str, text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        fail(format!("{label} must not be empty"));
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_date_is_trimmed() {
        assert_eq!(due_date(" 2025-03-07 "), "2025-03-07");
    }

    #[test]
    fn test_percent_keeps_out_of_range_values() {
        assert!((percent("Weight", 120.0) - 120.0).abs() < f64::EPSILON);
        assert!((percent("Grade", -5.0) + 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(name("Year name", "  Year 1 "), "Year 1");
    }
}
