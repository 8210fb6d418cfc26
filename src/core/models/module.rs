//! Module model

use super::assessment::Assessment;
use super::{coerce, find_index};
use serde::{Deserialize, Serialize};

/// A single course unit, graded through its assessments or overridden by a
/// moderated score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Unique, immutable identifier
    #[serde(deserialize_with = "coerce::id")]
    pub id: u64,

    /// Module name (e.g., "Operating Systems")
    #[serde(default)]
    pub name: String,

    /// Credit weight used within the year average
    #[serde(default, deserialize_with = "coerce::f64_or_zero")]
    pub ects: f64,

    /// Official final mark; replaces the computed average when present
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub moderated_score: Option<f64>,

    /// Assessments in entry order
    #[serde(default)]
    pub assessments: Vec<Assessment>,
}

impl Module {
    /// Create an empty module
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the owning record
    /// * `name` - Module name
    /// * `ects` - Credit weight
    #[must_use]
    pub const fn new(id: u64, name: String, ects: f64) -> Self {
        Self {
            id,
            name,
            ects,
            moderated_score: None,
            assessments: Vec::new(),
        }
    }

    /// The moderated score, if present and a real number
    #[must_use]
    pub fn valid_moderated_score(&self) -> Option<f64> {
        self.moderated_score.filter(|s| s.is_finite())
    }

    /// Look up an assessment by id or title
    #[must_use]
    pub fn assessment(&self, selector: &str) -> Option<&Assessment> {
        find_index(&self.assessments, selector, |a| (a.id, a.title.as_str()))
            .map(|idx| &self.assessments[idx])
    }

    /// Mutable lookup by id or title
    pub fn assessment_mut(&mut self, selector: &str) -> Option<&mut Assessment> {
        let idx = find_index(&self.assessments, selector, |a| (a.id, a.title.as_str()))?;
        self.assessments.get_mut(idx)
    }

    /// Remove an assessment by id or title, returning it
    pub fn remove_assessment(&mut self, selector: &str) -> Option<Assessment> {
        find_index(&self.assessments, selector, |a| (a.id, a.title.as_str()))
            .map(|idx| self.assessments.remove(idx))
    }

    /// Sum of all positive assessment weights, graded or not
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.assessments
            .iter()
            .map(|a| a.weight)
            .filter(|w| w.is_finite() && *w > 0.0)
            .sum()
    }

    /// Number of assessments with a usable grade
    #[must_use]
    pub fn graded_count(&self) -> usize {
        self.assessments.iter().filter(|a| a.is_graded()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Module {
        let mut module = Module::new(10, "Algorithms".to_string(), 5.0);
        module
            .assessments
            .push(Assessment::new(11, "Coursework".to_string(), 40.0).with_grade(65.0));
        module
            .assessments
            .push(Assessment::new(12, "Exam".to_string(), 60.0));
        module
    }

    #[test]
    fn test_lookup_by_id_and_title() {
        let module = sample();
        assert_eq!(module.assessment("12").map(|a| a.id), Some(12));
        assert_eq!(module.assessment("coursework").map(|a| a.id), Some(11));
        assert!(module.assessment("Quiz").is_none());
    }

    #[test]
    fn test_total_weight_ignores_non_positive() {
        let mut module = sample();
        module
            .assessments
            .push(Assessment::new(13, "Bonus".to_string(), -5.0));
        module
            .assessments
            .push(Assessment::new(14, "Broken".to_string(), f64::NAN));
        assert!((module.total_weight() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remove_assessment() {
        let mut module = sample();
        let removed = module.remove_assessment("Exam").expect("exam exists");
        assert_eq!(removed.id, 12);
        assert_eq!(module.assessments.len(), 1);
        assert!(module.remove_assessment("Exam").is_none());
    }

    #[test]
    fn test_graded_count() {
        assert_eq!(sample().graded_count(), 1);
    }
}
