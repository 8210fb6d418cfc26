//! Module command handler

use super::{confirm, credits, fail, name, open_record, percent, save};
use crate::args::ModuleCommand;
use grade_tracker::config::Config;
use grade_tracker::core::models::AcademicRecord;

/// Dispatch module subcommands
pub fn run(command: ModuleCommand, config: &Config) {
    let (mut store, mut record) = open_record(config);

    let changed = match command {
        ModuleCommand::Add {
            year,
            name: raw,
            ects,
        } => {
            let module_name = name("Module name", &raw);
            let ects = credits(ects);
            let id = record
                .add_module(&year, module_name.clone(), ects)
                .unwrap_or_else(|e| fail(e));
            println!("✓ Added module '{module_name}' (id {id}, {ects} ECTS)");
            true
        }
        ModuleCommand::Edit {
            year,
            module,
            name: new_name,
            ects,
            moderated_score,
            clear_moderated,
        } => {
            if new_name.is_none() && ects.is_none() && moderated_score.is_none() && !clear_moderated
            {
                fail("Nothing to change; pass --name, --ects, --moderated-score or --clear-moderated");
            }
            let target = record
                .module_mut(&year, &module)
                .unwrap_or_else(|e| fail(e));
            if let Some(raw) = new_name {
                target.name = name("Module name", &raw);
            }
            if let Some(e) = ects {
                target.ects = credits(e);
            }
            if let Some(score) = moderated_score {
                target.moderated_score = Some(percent("Moderated score", score));
            } else if clear_moderated {
                target.moderated_score = None;
            }
            println!("✓ Updated module '{}'", target.name);
            true
        }
        ModuleCommand::Remove { year, module, yes } => remove(&mut record, &year, &module, yes),
    };

    if changed {
        save(&mut store, &record);
    }
}

fn remove(record: &mut AcademicRecord, year: &str, selector: &str, yes: bool) -> bool {
    let module = record.module(year, selector).unwrap_or_else(|e| fail(e));
    let prompt = format!(
        "Delete module '{}' and its {} assessment(s)?",
        module.name,
        module.assessments.len()
    );
    if !yes && !confirm(&prompt) {
        println!("✗ Delete cancelled");
        return false;
    }
    let removed = record
        .remove_module(year, selector)
        .unwrap_or_else(|e| fail(e));
    println!("✓ Deleted module '{}'", removed.name);
    true
}
