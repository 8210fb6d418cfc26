//! Due-date calendar: index assessments by date and lay months out on a grid
//!
//! The record is only read. Dates are taken from each assessment's due-date
//! string; strings that are not `YYYY-MM-DD` are skipped.

pub mod render;

use crate::core::error::{Error, Result};
use crate::core::models::AcademicRecord;
use chrono::{Datelike, Months, NaiveDate};
use logger::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub use render::{render_html, render_text};

/// First column of the month grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Sunday-first weeks
    #[default]
    Sunday,
    /// Monday-first (ISO) weeks
    Monday,
}

impl WeekStart {
    /// Column of `date` within a week row
    fn column(self, date: NaiveDate) -> usize {
        let offset = match self {
            Self::Sunday => date.weekday().num_days_from_sunday(),
            Self::Monday => date.weekday().num_days_from_monday(),
        };
        offset as usize
    }

    /// Short weekday labels in column order
    #[must_use]
    pub const fn labels(self) -> [&'static str; 7] {
        match self {
            Self::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            Self::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            _ => Err(format!("Invalid week start: '{s}' (expected sunday or monday)")),
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sunday => write!(f, "sunday"),
            Self::Monday => write!(f, "monday"),
        }
    }
}

/// An assessment as shown on the calendar
#[derive(Debug, Clone, PartialEq)]
pub struct DueItem {
    /// Owning year name
    pub year: String,
    /// Owning module name
    pub module: String,
    /// Assessment title
    pub title: String,
    /// Assessment weight
    pub weight: f64,
    /// Grade, when recorded
    pub grade: Option<f64>,
}

/// Assessments keyed by due date, in date order
pub type DueIndex = BTreeMap<NaiveDate, Vec<DueItem>>;

/// Index every assessment that has a parseable due date.
#[must_use]
pub fn index_due_dates(record: &AcademicRecord) -> DueIndex {
    let mut index = DueIndex::new();
    for (year, module, assessment) in record.assessments() {
        let Some(date) = assessment.due() else {
            if let Some(raw) = &assessment.due_date {
                debug!("Skipping unreadable due date '{raw}' on {}", assessment.title);
            }
            continue;
        };
        index.entry(date).or_default().push(DueItem {
            year: year.name.clone(),
            module: module.name.clone(),
            title: assessment.title.clone(),
            weight: assessment.weight,
            grade: assessment.valid_grade(),
        });
    }
    index
}

/// One week row; `None` cells fall outside the month
pub type Week = [Option<u32>; 7];

/// A month laid out as week rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// Calendar year
    pub year: i32,
    /// Month, 1-12
    pub month: u32,
    /// Column order
    pub week_start: WeekStart,
    /// Week rows; the first is padded before day 1, the last after the final day
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    /// Lay out `month` of `year`.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` when the month is outside 1-12 or the
    /// year is outside chrono's range.
    pub fn new(year: i32, month: u32, week_start: WeekStart) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| Error::InvalidInput(format!("no such month: {year}-{month:02}")))?;
        Ok(Self::layout(first, week_start))
    }

    /// Grid of the month containing `date`
    #[must_use]
    pub fn containing(date: NaiveDate, week_start: WeekStart) -> Self {
        Self::layout(first_of_month(date), week_start)
    }

    fn layout(first: NaiveDate, week_start: WeekStart) -> Self {
        let mut weeks = Vec::with_capacity(6);
        let mut week: Week = [None; 7];
        let mut col = week_start.column(first);
        for day in 1..=days_in_month(first) {
            week[col] = Some(day);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }

        Self {
            year: first.year(),
            month: first.month(),
            week_start,
            weeks,
        }
    }

    /// First day of the month
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Number of days in the month
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.first_day())
    }

    /// Date of `day` in this month
    #[must_use]
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Grid of the previous month
    #[must_use]
    pub fn previous(&self) -> Self {
        let date = self
            .first_day()
            .checked_sub_months(Months::new(1))
            .unwrap_or_else(|| self.first_day());
        Self::containing(date, self.week_start)
    }

    /// Grid of the next month
    #[must_use]
    pub fn next(&self) -> Self {
        let date = self
            .first_day()
            .checked_add_months(Months::new(1))
            .unwrap_or_else(|| self.first_day());
        Self::containing(date, self.week_start)
    }

    /// Heading such as "March 2025"
    #[must_use]
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Entries of `index` that fall inside this month
    pub fn items_in<'a>(
        &self,
        index: &'a DueIndex,
    ) -> impl Iterator<Item = (&'a NaiveDate, &'a Vec<DueItem>)> {
        let first = self.first_day();
        let last = self.date(self.days_in_month()).unwrap_or(first);
        index.range(first..=last)
    }
}

/// Parse a `YYYY-MM` month argument
///
/// # Errors
/// Returns `Error::InvalidInput` when the text is not a valid month.
pub fn parse_month(text: &str) -> Result<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", text.trim()), "%Y-%m-%d")
        .map_err(|_| Error::InvalidInput(format!("expected YYYY-MM, got '{text}'")))?;
    Ok((date.year(), date.month()))
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn days_in_month(first: NaiveDate) -> u32 {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}
