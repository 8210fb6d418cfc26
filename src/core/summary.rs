//! Read-only snapshot of everything the CLI displays for a record

use crate::core::grades::{self, Classification, TargetGrade};
use crate::core::models::{AcademicRecord, Module, Year};

/// Weights within this distance of 100 are treated as complete
const WEIGHT_TOLERANCE: f64 = 0.01;

/// Derived values for one module
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleSummary {
    /// Module id
    pub id: u64,
    /// Module name
    pub name: String,
    /// Credit weight
    pub ects: f64,
    /// Computed average of graded work
    pub computed_average: f64,
    /// Moderated score, when set
    pub moderated_score: Option<f64>,
    /// Score the module counts with in the year average
    pub effective_score: f64,
    /// Percentage of weight graded so far
    pub graded_weight: f64,
    /// Sum of all positive assessment weights
    pub total_weight: f64,
    /// Answer to the target-grade question for the summary target
    pub target: TargetGrade,
}

impl ModuleSummary {
    /// Build from a module and the target percentage
    #[must_use]
    pub fn new(module: &Module, target_percent: f64) -> Self {
        let average = grades::module_average(module);
        Self {
            id: module.id,
            name: module.name.clone(),
            ects: module.ects,
            computed_average: average.average,
            moderated_score: module.valid_moderated_score(),
            effective_score: grades::effective_score(module),
            graded_weight: average.total_graded_weight,
            total_weight: module.total_weight(),
            target: grades::target_grade_needed(Some(module), target_percent),
        }
    }

    /// Whether the assessment weights fail to add up to 100
    #[must_use]
    pub fn weights_incomplete(&self) -> bool {
        (self.total_weight - 100.0).abs() > WEIGHT_TOLERANCE
    }
}

/// Derived values for one year
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    /// Year id
    pub id: u64,
    /// Year name
    pub name: String,
    /// Contribution to the degree average
    pub weighting: f64,
    /// Credit-weighted year average
    pub average: f64,
    /// Display-only collapsed flag, carried through for renderers
    pub collapsed: bool,
    /// Per-module values in entry order
    pub modules: Vec<ModuleSummary>,
}

impl YearSummary {
    /// Build from a year and the target percentage
    #[must_use]
    pub fn new(year: &Year, target_percent: f64) -> Self {
        Self {
            id: year.id,
            name: year.name.clone(),
            weighting: year.weighting,
            average: grades::year_average(year),
            collapsed: year.collapsed,
            modules: year
                .modules
                .iter()
                .map(|m| ModuleSummary::new(m, target_percent))
                .collect(),
        }
    }
}

/// Derived values for a whole record
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSummary {
    /// Target percentage used for every module's target answer
    pub target_percent: f64,
    /// Per-year values in entry order
    pub years: Vec<YearSummary>,
    /// Overall weighted degree average
    pub overall_average: f64,
    /// Classification band of the overall average
    pub classification: Option<Classification>,
    /// Sum of positive year weightings
    pub total_weighting: f64,
}

impl RecordSummary {
    /// Compute the snapshot. The record is only read.
    #[must_use]
    pub fn new(record: &AcademicRecord, target_percent: f64) -> Self {
        let overall_average = grades::overall_degree_average(&record.years);
        Self {
            target_percent,
            years: record
                .years
                .iter()
                .map(|y| YearSummary::new(y, target_percent))
                .collect(),
            overall_average,
            classification: Classification::from_average(overall_average),
            total_weighting: record
                .years
                .iter()
                .map(|y| y.weighting)
                .filter(|w| w.is_finite() && *w > 0.0)
                .sum(),
        }
    }

    /// Whether year weightings fail to add up to 100
    #[must_use]
    pub fn weightings_incomplete(&self) -> bool {
        (self.total_weighting - 100.0).abs() > WEIGHT_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Assessment;

    fn record() -> AcademicRecord {
        let mut record = AcademicRecord::new();
        record.add_year("Year 2".to_string(), 40.0).expect("year added");
        record.add_year("Year 3".to_string(), 60.0).expect("year added");
        record
            .add_module("Year 2", "Networks".to_string(), 10.0)
            .expect("year");
        record
            .add_assessment(
                "Year 2",
                "Networks",
                Assessment::new(0, "Lab".to_string(), 40.0).with_grade(50.0),
            )
            .expect("module");
        record
            .add_module("Year 3", "Thesis".to_string(), 30.0)
            .expect("year");
        record.module_mut("Year 3", "Thesis").expect("module").moderated_score = Some(75.0);
        record
    }

    #[test]
    fn test_summary_matches_engine() {
        let summary = RecordSummary::new(&record(), 70.0);
        assert_eq!(summary.years.len(), 2);

        let networks = &summary.years[0].modules[0];
        assert!((networks.computed_average - 50.0).abs() < 1e-9);
        assert!((networks.graded_weight - 40.0).abs() < 1e-9);
        assert_eq!(networks.target.to_string(), "83.33%");
        assert!(networks.weights_incomplete());

        let thesis = &summary.years[1].modules[0];
        assert_eq!(thesis.target, TargetGrade::NotApplicable);
        assert!((thesis.effective_score - 75.0).abs() < 1e-9);

        // (50 * 40 + 75 * 60) / 100
        assert!((summary.overall_average - 65.0).abs() < 1e-9);
        assert_eq!(summary.classification, Some(Classification::UpperSecond));
        assert!(!summary.weightings_incomplete());
    }

    #[test]
    fn test_empty_record_summary() {
        let summary = RecordSummary::new(&AcademicRecord::new(), 40.0);
        assert!(summary.years.is_empty());
        assert!(summary.overall_average.abs() < f64::EPSILON);
        assert!(summary.classification.is_none());
        assert!(summary.weightings_incomplete());
    }
}
