//! Calendar command handler

use super::{fail, open_record};
use chrono::Local;
use grade_tracker::config::Config;
use grade_tracker::core::calendar::{self, MonthGrid};
use grade_tracker::core::storage;
use std::fs;
use std::path::Path;

/// Print a month of due dates, optionally writing an HTML page too
pub fn run(month: Option<&str>, html: Option<&Path>, config: &Config) {
    let week_start = config.week_start();
    let grid = match month {
        Some(text) => calendar::parse_month(text)
            .and_then(|(year, month)| MonthGrid::new(year, month, week_start))
            .unwrap_or_else(|e| fail(e)),
        None => MonthGrid::containing(Local::now().date_naive(), week_start),
    };

    let (store, record) = open_record(config);
    let index = calendar::index_due_dates(&record);
    print!("{}", calendar::render_text(&grid, &index));

    let Some(path) = html else {
        return;
    };
    let theme = storage::load_theme(&store).unwrap_or_else(|e| fail(e));
    let page = calendar::render_html(&grid, &index, theme)
        .unwrap_or_else(|e| fail(format!("Failed to render calendar: {e}")));
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && fs::create_dir_all(parent).is_err() {
            fail(format!("Failed to create directory: {}", parent.display()));
        }
    }
    if let Err(e) = fs::write(path, page) {
        fail(format!("Failed to write {}: {e}", path.display()));
    }
    println!("✓ Calendar written to {}", path.display());
}
