//! Assessment command handler

use super::{confirm, due_date, fail, name, open_record, percent, save};
use crate::args::AssessmentCommand;
use grade_tracker::config::Config;
use grade_tracker::core::models::{AcademicRecord, Assessment};

/// Dispatch assessment subcommands
pub fn run(command: AssessmentCommand, config: &Config) {
    let (mut store, mut record) = open_record(config);

    let changed = match command {
        AssessmentCommand::Add {
            year,
            module,
            title,
            weight,
            grade,
            due,
        } => {
            let title = name("Title", &title);
            let mut draft = Assessment::new(0, title.clone(), percent("Weight", weight));
            if let Some(g) = grade {
                draft = draft.with_grade(percent("Grade", g));
            }
            if let Some(d) = due {
                draft = draft.with_due_date(due_date(&d));
            }
            let id = record
                .add_assessment(&year, &module, draft)
                .unwrap_or_else(|e| fail(e));
            println!("✓ Added assessment '{title}' (id {id})");
            true
        }
        AssessmentCommand::Edit {
            year,
            module,
            assessment,
            title,
            weight,
            grade,
            clear_grade,
            due,
            clear_due,
        } => {
            let nothing = title.is_none()
                && weight.is_none()
                && grade.is_none()
                && due.is_none()
                && !clear_grade
                && !clear_due;
            if nothing {
                fail("Nothing to change; pass --title, --weight, --grade, --due or a --clear flag");
            }
            let target = record
                .assessment_mut(&year, &module, &assessment)
                .unwrap_or_else(|e| fail(e));
            if let Some(raw) = title {
                target.title = name("Title", &raw);
            }
            if let Some(w) = weight {
                target.weight = percent("Weight", w);
            }
            if let Some(g) = grade {
                target.grade = Some(percent("Grade", g));
            } else if clear_grade {
                target.grade = None;
            }
            if let Some(d) = due {
                target.due_date = Some(due_date(&d));
            } else if clear_due {
                target.due_date = None;
            }
            println!("✓ Updated assessment '{}'", target.title);
            true
        }
        AssessmentCommand::Remove {
            year,
            module,
            assessment,
            yes,
        } => remove(&mut record, &year, &module, &assessment, yes),
    };

    if changed {
        save(&mut store, &record);
    }
}

fn remove(
    record: &mut AcademicRecord,
    year: &str,
    module: &str,
    selector: &str,
    yes: bool,
) -> bool {
    let title = record
        .module(year, module)
        .unwrap_or_else(|e| fail(e))
        .assessment(selector)
        .map(|a| a.title.clone())
        .unwrap_or_else(|| fail(format!("No assessment matches '{selector}'")));
    if !yes && !confirm(&format!("Delete assessment '{title}'?")) {
        println!("✗ Delete cancelled");
        return false;
    }
    record
        .remove_assessment(year, module, selector)
        .unwrap_or_else(|e| fail(e));
    println!("✓ Deleted assessment '{title}'");
    true
}
