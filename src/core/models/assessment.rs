//! Assessment model

use super::coerce;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format used for due dates (the HTML date-input format)
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One graded piece of work within a module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Unique, immutable identifier
    #[serde(deserialize_with = "coerce::id")]
    pub id: u64,

    /// Title (e.g., "Midterm Exam")
    #[serde(default)]
    pub title: String,

    /// Due date as entered, expected `YYYY-MM-DD`
    #[serde(default, deserialize_with = "coerce::opt_text")]
    pub due_date: Option<String>,

    /// Share of the module mark, as a percentage (0-100 expected, not enforced)
    #[serde(default, deserialize_with = "coerce::f64_or_zero")]
    pub weight: f64,

    /// Mark achieved, as a percentage; `None` while ungraded
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub grade: Option<f64>,
}

impl Assessment {
    /// Create an ungraded assessment with no due date
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the owning record
    /// * `title` - Assessment title
    /// * `weight` - Percentage of the module mark
    #[must_use]
    pub const fn new(id: u64, title: String, weight: f64) -> Self {
        Self {
            id,
            title,
            due_date: None,
            weight,
            grade: None,
        }
    }

    /// Builder-style setter for the grade
    #[must_use]
    pub const fn with_grade(mut self, grade: f64) -> Self {
        self.grade = Some(grade);
        self
    }

    /// Builder-style setter for the due date
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// The grade, if present and a real number
    #[must_use]
    pub fn valid_grade(&self) -> Option<f64> {
        self.grade.filter(|g| g.is_finite())
    }

    /// Whether a usable grade has been recorded
    #[must_use]
    pub fn is_graded(&self) -> bool {
        self.valid_grade().is_some()
    }

    /// Parsed due date; `None` when absent or not `YYYY-MM-DD`
    #[must_use]
    pub fn due(&self) -> Option<NaiveDate> {
        self.due_date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), DUE_DATE_FORMAT).ok())
    }
}
