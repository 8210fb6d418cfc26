//! Summary command handler

use super::{open_record, percent};
use grade_tracker::config::Config;
use grade_tracker::core::summary::{RecordSummary, YearSummary};
use logger::warn;

/// Print averages, classification and per-module targets
pub fn run(target: Option<f64>, config: &Config) {
    let target = percent("Target", target.unwrap_or_else(|| config.target()));
    let (_, record) = open_record(config);
    let summary = RecordSummary::new(&record, target);
    print!("{}", render(&summary));

    if !summary.years.is_empty() && summary.weightings_incomplete() {
        warn!(
            "Year weightings add up to {:.2}%, not 100%",
            summary.total_weighting
        );
    }
    for module in summary.years.iter().flat_map(|y| &y.modules) {
        if module.total_weight > 0.0 && module.weights_incomplete() {
            warn!(
                "Assessment weights in '{}' add up to {:.2}%, not 100%",
                module.name, module.total_weight
            );
        }
    }
}

fn render(summary: &RecordSummary) -> String {
    let mut out = String::new();
    if summary.years.is_empty() {
        out.push_str("No years recorded yet. Add one with `gradetracker year add <NAME>`.\n");
        return out;
    }

    for year in &summary.years {
        render_year(&mut out, year, summary.target_percent);
    }

    out.push_str(&format!(
        "\nOverall degree average: {:.2}%\n",
        summary.overall_average
    ));
    match summary.classification {
        Some(class) => out.push_str(&format!("Classification: {class}\n")),
        None => out.push_str("Classification: -\n"),
    }
    out
}

fn render_year(out: &mut String, year: &YearSummary, target: f64) {
    let marker = if year.collapsed { "+" } else { "-" };
    out.push_str(&format!(
        "{marker} [{}] {} (weighting {}%): average {:.2}%\n",
        year.id, year.name, year.weighting, year.average
    ));
    if year.collapsed {
        return;
    }
    if year.modules.is_empty() {
        out.push_str("    (no modules)\n");
        return;
    }
    for module in &year.modules {
        let score = module.moderated_score.map_or_else(
            || format!("{:.2}%", module.computed_average),
            |m| format!("{m:.2}% (moderated)"),
        );
        out.push_str(&format!(
            "    [{}] {:<24} {:>5} ECTS  {score:<20} graded {:>5.1}%  need for {target}%: {}\n",
            module.id, module.name, module.ects, module.graded_weight, module.target
        ));
    }
}
