//! Year command handler

use super::{confirm, fail, name, open_record, percent, save};
use crate::args::YearCommand;
use grade_tracker::config::Config;
use grade_tracker::core::grades;
use grade_tracker::core::models::AcademicRecord;
use logger::verbose;

/// Dispatch year subcommands
pub fn run(command: YearCommand, config: &Config) {
    let (mut store, mut record) = open_record(config);

    let changed = match command {
        YearCommand::List => {
            list(&record);
            false
        }
        YearCommand::Add { name: raw, weighting } => {
            let year_name = name("Year name", &raw);
            let weighting = percent("Weighting", weighting);
            let id = record
                .add_year(year_name.clone(), weighting)
                .unwrap_or_else(|e| fail(e));
            println!("✓ Added year '{year_name}' (id {id}, weighting {weighting}%)");
            true
        }
        YearCommand::Edit {
            year,
            name: new_name,
            weighting,
        } => {
            if new_name.is_none() && weighting.is_none() {
                fail("Nothing to change; pass --name or --weighting");
            }
            let target = record.year_mut(&year).unwrap_or_else(|e| fail(e));
            if let Some(raw) = new_name {
                target.name = name("Year name", &raw);
            }
            if let Some(w) = weighting {
                target.weighting = percent("Weighting", w);
            }
            println!("✓ Updated year '{}'", target.name);
            true
        }
        YearCommand::Remove { year, yes } => remove(&mut record, &year, yes),
        YearCommand::Toggle { year } => {
            let target = record.year_mut(&year).unwrap_or_else(|e| fail(e));
            target.collapsed = !target.collapsed;
            let state = if target.collapsed { "collapsed" } else { "expanded" };
            println!("✓ Year '{}' {state}", target.name);
            true
        }
    };

    if changed {
        save(&mut store, &record);
    }
}

fn remove(record: &mut AcademicRecord, selector: &str, yes: bool) -> bool {
    let year = record.year(selector).unwrap_or_else(|e| fail(e));
    let prompt = format!(
        "Delete year '{}' and its {} module(s)?",
        year.name,
        year.modules.len()
    );
    if !yes && !confirm(&prompt) {
        println!("✗ Delete cancelled");
        return false;
    }
    let removed = record.remove_year(selector).unwrap_or_else(|e| fail(e));
    println!("✓ Deleted year '{}'", removed.name);
    true
}

fn list(record: &AcademicRecord) {
    if record.is_empty() {
        println!("No years recorded yet.");
        return;
    }
    for year in &record.years {
        println!(
            "[{}] {:<20} weighting {:>6.2}%  average {:>6.2}%  ({} modules, {} ECTS)",
            year.id,
            year.name,
            year.weighting,
            grades::year_average(year),
            year.modules.len(),
            year.total_ects()
        );
        for module in &year.modules {
            verbose!("      [{}] {} ({} ECTS)", module.id, module.name, module.ects);
        }
    }
}
