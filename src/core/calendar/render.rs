//! Text and HTML renderings of a month grid

use super::{DueIndex, MonthGrid};
use crate::core::error::Result;
use crate::core::storage::Theme;
use askama::Template;
use std::fmt::Write;

/// Plain-text month view. Days with something due are starred and the
/// entries are listed under the grid.
#[must_use]
pub fn render_text(grid: &MonthGrid, index: &DueIndex) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:^28}", grid.title());
    for label in grid.week_start.labels() {
        let _ = write!(out, "{label:>4}");
    }
    out.push('\n');

    for week in &grid.weeks {
        for cell in week {
            match cell {
                Some(day) => {
                    let busy = grid.date(*day).is_some_and(|d| index.contains_key(&d));
                    let mark = if busy { '*' } else { ' ' };
                    let _ = write!(out, " {day:>2}{mark}");
                }
                None => out.push_str("    "),
            }
        }
        out.push('\n');
    }

    let mut any = false;
    for (date, items) in grid.items_in(index) {
        if !any {
            out.push('\n');
            any = true;
        }
        for item in items {
            let grade = item
                .grade
                .map_or_else(|| "ungraded".to_string(), |g| format!("{g:.1}%"));
            let _ = writeln!(
                out,
                "{} {} / {}: {} ({}%, {grade})",
                date.format("%a %d"),
                item.year,
                item.module,
                item.title,
                item.weight
            );
        }
    }
    if !any {
        out.push_str("\nNothing due this month.\n");
    }
    out
}

/// One day cell of the HTML grid
struct DayCell {
    label: String,
    css: &'static str,
    entries: Vec<String>,
}

#[derive(Template)]
#[template(path = "calendar.html")]
struct CalendarPage<'a> {
    title: String,
    theme: &'a str,
    labels: [&'static str; 7],
    weeks: Vec<Vec<DayCell>>,
    previous: String,
    next: String,
}

/// Self-contained HTML month view styled for `theme`.
///
/// # Errors
/// Returns an error if the template fails to render.
pub fn render_html(grid: &MonthGrid, index: &DueIndex, theme: Theme) -> Result<String> {
    let weeks = grid
        .weeks
        .iter()
        .map(|week| {
            week.iter()
                .map(|cell| {
                    let Some(day) = *cell else {
                        return DayCell {
                            label: String::new(),
                            css: "empty",
                            entries: Vec::new(),
                        };
                    };
                    let entries: Vec<String> = grid
                        .date(day)
                        .and_then(|d| index.get(&d))
                        .map(|items| {
                            items
                                .iter()
                                .map(|i| format!("{}: {}", i.module, i.title))
                                .collect()
                        })
                        .unwrap_or_default();
                    DayCell {
                        label: day.to_string(),
                        css: if entries.is_empty() { "day" } else { "day due" },
                        entries,
                    }
                })
                .collect()
        })
        .collect();

    let page = CalendarPage {
        title: grid.title(),
        theme: theme.as_str(),
        labels: grid.week_start.labels(),
        weeks,
        previous: grid.previous().title(),
        next: grid.next().title(),
    };
    Ok(page.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::{index_due_dates, WeekStart};
    use crate::core::models::{AcademicRecord, Assessment};

    fn record() -> AcademicRecord {
        let mut record = AcademicRecord::new();
        record.add_year("Year 2".to_string(), 40.0).expect("year added");
        record
            .add_module("Year 2", "Graphics & Vision".to_string(), 5.0)
            .expect("year");
        record
            .add_assessment(
                "Year 2",
                "Graphics & Vision",
                Assessment::new(0, "Ray tracer".to_string(), 30.0)
                    .with_grade(74.0)
                    .with_due_date("2025-03-14"),
            )
            .expect("module");
        record
    }

    #[test]
    fn test_text_marks_due_days() {
        let grid = MonthGrid::new(2025, 3, WeekStart::Sunday).expect("month");
        let text = render_text(&grid, &index_due_dates(&record()));
        assert!(text.contains("March 2025"));
        assert!(text.contains(" 14*"));
        assert!(text.contains("Fri 14 Year 2 / Graphics & Vision: Ray tracer (30%, 74.0%)"));
    }

    #[test]
    fn test_text_empty_month() {
        let grid = MonthGrid::new(2025, 5, WeekStart::Monday).expect("month");
        let text = render_text(&grid, &index_due_dates(&record()));
        assert!(text.contains("Nothing due this month."));
        assert!(text.starts_with(&format!("{:^28}", "May 2025")));
    }

    #[test]
    fn test_html_escapes_and_themes() {
        let grid = MonthGrid::new(2025, 3, WeekStart::Sunday).expect("month");
        let html = render_html(&grid, &index_due_dates(&record()), Theme::Dark).expect("render");
        assert!(html.contains("class=\"dark\""));
        assert!(html.contains("Graphics &amp; Vision: Ray tracer"));
        assert!(html.contains("February 2025"));
        assert!(html.contains("April 2025"));
    }
}
