//! Target command handler

use super::{fail, open_record, percent};
use grade_tracker::config::Config;
use grade_tracker::core::grades::{self, TargetGrade};

/// Print the average needed on a module's remaining work
pub fn run(year: &str, module: &str, target: Option<f64>, config: &Config) {
    let target = percent("Target", target.unwrap_or_else(|| config.target()));
    let (_, record) = open_record(config);
    let module = record.module(year, module).unwrap_or_else(|e| fail(e));

    let answer = grades::target_grade_needed(Some(module), target);
    let average = grades::module_average(module);
    println!(
        "{}: {:.2}% so far on {:.1}% of the weight",
        module.name, average.average, average.total_graded_weight
    );
    match answer {
        TargetGrade::NotApplicable => {
            println!("Moderated score is set; no target applies");
        }
        TargetGrade::Done => println!("All work is graded"),
        TargetGrade::Achieved => println!("{target}% is already secured"),
        TargetGrade::Unreachable => println!("{target}% is out of reach (needs {answer})"),
        TargetGrade::Required(_) => {
            println!("Need {answer} on the remaining work for {target}%");
        }
    }
}
