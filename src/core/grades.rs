//! Grade engine: weighted averages, target grades and degree classification
//!
//! Every function here is pure. Inputs are borrowed, nothing is retained
//! between calls, and degenerate inputs (nothing graded, zero credits, zero
//! weighting) produce `0` rather than an error.

use crate::core::models::{Module, Year};
use std::fmt;

/// Average of a module's graded work
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleAverage {
    /// Weighted mean grade over graded assessments (0 when nothing is graded)
    pub average: f64,
    /// Percentage of the module's weight that has been graded so far
    pub total_graded_weight: f64,
}

/// Weighted average over assessments that have a grade and a positive weight.
///
/// Ungraded assessments are left out of both sums rather than counted as 0.
#[must_use]
pub fn module_average(module: &Module) -> ModuleAverage {
    let mut weighted_score = 0.0;
    let mut weight_sum = 0.0;

    for assessment in &module.assessments {
        let Some(grade) = assessment.valid_grade() else {
            continue;
        };
        if assessment.weight <= 0.0 || !assessment.weight.is_finite() {
            continue;
        }
        let fraction = assessment.weight / 100.0;
        weighted_score += grade * fraction;
        weight_sum += fraction;
    }

    let average = if weight_sum > 0.0 {
        weighted_score / weight_sum
    } else {
        0.0
    };

    ModuleAverage {
        average,
        total_graded_weight: weight_sum * 100.0,
    }
}

/// The score a module counts with: the moderated score when set, otherwise
/// the computed average.
#[must_use]
pub fn effective_score(module: &Module) -> f64 {
    module
        .valid_moderated_score()
        .unwrap_or_else(|| module_average(module).average)
}

/// Credit-weighted mean of effective module scores.
///
/// Only modules with a positive effective score and positive credits count,
/// so a module scoring exactly 0 is treated like an ungraded one.
#[must_use]
pub fn year_average(year: &Year) -> f64 {
    let mut weighted_score = 0.0;
    let mut credits = 0.0;

    for module in &year.modules {
        let score = effective_score(module);
        if score > 0.0 && module.ects > 0.0 && module.ects.is_finite() {
            weighted_score += score * module.ects;
            credits += module.ects;
        }
    }

    if credits > 0.0 {
        weighted_score / credits
    } else {
        0.0
    }
}

/// Weighting-weighted mean of year averages over years with positive weighting.
#[must_use]
pub fn overall_degree_average(years: &[Year]) -> f64 {
    let mut weighted_score = 0.0;
    let mut total_weighting = 0.0;

    for year in years {
        if year.weighting > 0.0 && year.weighting.is_finite() {
            weighted_score += year_average(year) * year.weighting;
            total_weighting += year.weighting;
        }
    }

    if total_weighting > 0.0 {
        weighted_score / total_weighting
    } else {
        0.0
    }
}

/// Outcome of a target-grade query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetGrade {
    /// No module, or the module has a moderated score
    NotApplicable,
    /// All of the module's weight is already graded
    Done,
    /// The target is met whatever the remaining work scores
    Achieved,
    /// The target would need more than 100% on the remaining work
    Unreachable,
    /// Average needed on the remaining work, as a percentage
    Required(f64),
}

impl fmt::Display for TargetGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable => write!(f, "N/A"),
            Self::Done => write!(f, "Done"),
            Self::Achieved => write!(f, "Achieved"),
            Self::Unreachable => write!(f, ">100%"),
            Self::Required(needed) => write!(f, "{needed:.2}%"),
        }
    }
}

/// Average needed on a module's ungraded work to finish on `target_percent`.
///
/// Assumes the module's weights add up to 100. Checks run in order: missing
/// or moderated module, nothing left to grade, target already secured, target
/// out of reach.
#[must_use]
pub fn target_grade_needed(module: Option<&Module>, target_percent: f64) -> TargetGrade {
    let Some(module) = module else {
        return TargetGrade::NotApplicable;
    };
    if module.valid_moderated_score().is_some() {
        return TargetGrade::NotApplicable;
    }

    let mut graded_weight = 0.0;
    let mut achieved_score = 0.0;
    for assessment in &module.assessments {
        let Some(grade) = assessment.valid_grade() else {
            continue;
        };
        if !assessment.weight.is_finite() {
            continue;
        }
        graded_weight += assessment.weight;
        achieved_score += grade * assessment.weight;
    }

    let remaining_weight = 100.0 - graded_weight;
    if remaining_weight <= 0.0 {
        return TargetGrade::Done;
    }

    let needed_score = target_percent * 100.0 - achieved_score;
    if needed_score <= 0.0 {
        return TargetGrade::Achieved;
    }

    let required_average = needed_score / remaining_weight;
    if required_average > 100.0 {
        TargetGrade::Unreachable
    } else {
        TargetGrade::Required(required_average)
    }
}

/// Honours degree classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Classification {
    /// Below 40
    Fail,
    /// 40 to 49.99
    Third,
    /// 50 to 59.99
    LowerSecond,
    /// 60 to 69.99
    UpperSecond,
    /// 70 and above
    First,
}

impl Classification {
    /// Band lower bounds, best first
    const BANDS: [(f64, Self); 4] = [
        (70.0, Self::First),
        (60.0, Self::UpperSecond),
        (50.0, Self::LowerSecond),
        (40.0, Self::Third),
    ];

    /// Band for an overall average; `None` when nothing has been graded yet.
    #[must_use]
    pub fn from_average(average: f64) -> Option<Self> {
        if average.is_nan() || average <= 0.0 {
            return None;
        }
        Some(
            Self::BANDS
                .iter()
                .find(|(floor, _)| average >= *floor)
                .map_or(Self::Fail, |(_, band)| *band),
        )
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::First => "First Class Honours",
            Self::UpperSecond => "Upper Second Class Honours (2:1)",
            Self::LowerSecond => "Lower Second Class Honours (2:2)",
            Self::Third => "Third Class Honours",
            Self::Fail => "Fail",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Assessment;

    fn module_with(parts: &[(f64, Option<f64>)]) -> Module {
        let mut module = Module::new(1, "Test".to_string(), 10.0);
        for (idx, (weight, grade)) in parts.iter().enumerate() {
            let mut a = Assessment::new(idx as u64 + 2, format!("A{idx}"), *weight);
            a.grade = *grade;
            module.assessments.push(a);
        }
        module
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_module_average_two_halves() {
        let avg = module_average(&module_with(&[(50.0, Some(80.0)), (50.0, Some(60.0))]));
        assert!(approx(avg.average, 70.0));
        assert!(approx(avg.total_graded_weight, 100.0));
    }

    #[test]
    fn test_module_average_nothing_graded() {
        let avg = module_average(&module_with(&[(50.0, None), (50.0, None)]));
        assert!(approx(avg.average, 0.0));
        assert!(approx(avg.total_graded_weight, 0.0));

        let empty = module_average(&module_with(&[]));
        assert!(approx(empty.average, 0.0));
    }

    #[test]
    fn test_module_average_excludes_ungraded_and_bad_weights() {
        let avg = module_average(&module_with(&[
            (30.0, Some(90.0)),
            (30.0, None),
            (0.0, Some(10.0)),
            (-20.0, Some(10.0)),
            (f64::NAN, Some(10.0)),
            (10.0, Some(f64::NAN)),
        ]));
        assert!(approx(avg.average, 90.0));
        assert!(approx(avg.total_graded_weight, 30.0));
    }

    #[test]
    fn test_module_average_is_order_independent() {
        let parts = [(20.0, Some(55.0)), (30.0, Some(72.0)), (50.0, Some(64.0))];
        let forward = module_average(&module_with(&parts));
        let mut reversed = parts;
        reversed.reverse();
        let backward = module_average(&module_with(&reversed));
        assert!(approx(forward.average, backward.average));
        assert!(approx(forward.total_graded_weight, backward.total_graded_weight));
    }

    #[test]
    fn test_effective_score_prefers_moderated() {
        let mut module = module_with(&[(100.0, Some(50.0))]);
        assert!(approx(effective_score(&module), 50.0));
        module.moderated_score = Some(58.0);
        assert!(approx(effective_score(&module), 58.0));
    }

    #[test]
    fn test_year_average_excludes_zero_score_module() {
        let mut year = Year::new(1, "Y".to_string(), 100.0);
        let mut moderated = Module::new(2, "M1".to_string(), 10.0);
        moderated.moderated_score = Some(80.0);
        let ungraded = Module::new(3, "M2".to_string(), 20.0);
        year.modules = vec![moderated, ungraded];
        assert!(approx(year_average(&year), 80.0));
    }

    #[test]
    fn test_year_average_weights_by_credits() {
        let mut year = Year::new(1, "Y".to_string(), 100.0);
        let mut a = module_with(&[(100.0, Some(60.0))]);
        a.ects = 10.0;
        let mut b = module_with(&[(100.0, Some(90.0))]);
        b.ects = 5.0;
        let mut no_credit = module_with(&[(100.0, Some(10.0))]);
        no_credit.ects = 0.0;
        year.modules = vec![a, b, no_credit];
        assert!(approx(year_average(&year), 70.0));
    }

    #[test]
    fn test_year_average_empty_is_zero() {
        assert!(approx(year_average(&Year::new(1, "Y".to_string(), 50.0)), 0.0));
    }

    #[test]
    fn test_overall_average_edge_cases() {
        assert!(approx(overall_degree_average(&[]), 0.0));

        let mut year = Year::new(1, "Y".to_string(), 0.0);
        let mut module = Module::new(2, "M".to_string(), 10.0);
        module.moderated_score = Some(75.0);
        year.modules.push(module);
        assert!(approx(overall_degree_average(&[year]), 0.0));
    }

    #[test]
    fn test_overall_average_weights_years() {
        let mut y2 = Year::new(1, "Y2".to_string(), 25.0);
        let mut m2 = Module::new(2, "M".to_string(), 10.0);
        m2.moderated_score = Some(60.0);
        y2.modules.push(m2);

        let mut y3 = Year::new(3, "Y3".to_string(), 75.0);
        let mut m3 = Module::new(4, "M".to_string(), 10.0);
        m3.moderated_score = Some(72.0);
        y3.modules.push(m3);

        let mut excluded = Year::new(5, "Y1".to_string(), -10.0);
        let mut m1 = Module::new(6, "M".to_string(), 10.0);
        m1.moderated_score = Some(10.0);
        excluded.modules.push(m1);

        assert!(approx(overall_degree_average(&[y2, y3, excluded]), 69.0));
    }

    #[test]
    fn test_target_not_applicable() {
        assert_eq!(target_grade_needed(None, 70.0), TargetGrade::NotApplicable);

        let mut module = module_with(&[(40.0, Some(10.0))]);
        module.moderated_score = Some(45.0);
        assert_eq!(
            target_grade_needed(Some(&module), 70.0),
            TargetGrade::NotApplicable
        );
    }

    #[test]
    fn test_target_treats_nan_moderated_score_as_unset() {
        let mut module = module_with(&[(40.0, Some(50.0))]);
        module.moderated_score = Some(f64::NAN);

        assert!(approx(effective_score(&module), 50.0));
        assert_eq!(
            target_grade_needed(Some(&module), 70.0).to_string(),
            "83.33%"
        );
    }

    #[test]
    fn test_target_done_when_fully_graded() {
        let module = module_with(&[(50.0, Some(80.0)), (50.0, Some(60.0))]);
        assert_eq!(target_grade_needed(Some(&module), 70.0), TargetGrade::Done);
    }

    #[test]
    fn test_target_required_average() {
        let module = module_with(&[(40.0, Some(50.0))]);
        let result = target_grade_needed(Some(&module), 70.0);
        assert_eq!(result.to_string(), "83.33%");
        match result {
            TargetGrade::Required(needed) => assert!(approx(needed, 5000.0 / 60.0)),
            other => panic!("expected a required average, got {other:?}"),
        }
    }

    #[test]
    fn test_target_achieved_only_when_nothing_needed() {
        let module = module_with(&[(40.0, Some(100.0))]);
        assert_eq!(
            target_grade_needed(Some(&module), 60.0).to_string(),
            "33.33%"
        );
        assert_eq!(
            target_grade_needed(Some(&module), 30.0),
            TargetGrade::Achieved
        );
        assert_eq!(
            target_grade_needed(Some(&module), 40.0),
            TargetGrade::Achieved
        );
    }

    #[test]
    fn test_target_unreachable() {
        let module = module_with(&[(80.0, Some(20.0))]);
        assert_eq!(
            target_grade_needed(Some(&module), 70.0),
            TargetGrade::Unreachable
        );
        assert_eq!(TargetGrade::Unreachable.to_string(), ">100%");
    }

    #[test]
    fn test_target_exactly_one_hundred_is_reachable() {
        let module = module_with(&[(50.0, Some(40.0))]);
        assert_eq!(
            target_grade_needed(Some(&module), 70.0),
            TargetGrade::Required(100.0)
        );
    }

    #[test]
    fn test_target_ignores_ungraded_assessments() {
        let module = module_with(&[(40.0, Some(50.0)), (60.0, None)]);
        assert_eq!(
            target_grade_needed(Some(&module), 70.0).to_string(),
            "83.33%"
        );
    }

    #[test]
    fn test_target_empty_module() {
        let module = module_with(&[]);
        assert_eq!(
            target_grade_needed(Some(&module), 55.0),
            TargetGrade::Required(55.0)
        );
    }

    #[test]
    fn test_classification_bands() {
        assert_eq!(Classification::from_average(0.0), None);
        assert_eq!(Classification::from_average(f64::NAN), None);
        assert_eq!(Classification::from_average(35.0), Some(Classification::Fail));
        assert_eq!(Classification::from_average(40.0), Some(Classification::Third));
        assert_eq!(
            Classification::from_average(59.99),
            Some(Classification::LowerSecond)
        );
        assert_eq!(
            Classification::from_average(60.0),
            Some(Classification::UpperSecond)
        );
        assert_eq!(Classification::from_average(84.0), Some(Classification::First));
        assert!(Classification::First > Classification::UpperSecond);
    }
}
