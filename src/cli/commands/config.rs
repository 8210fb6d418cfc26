//! Config command handler

use super::{confirm, fail};
use crate::args::ConfigSubcommand;
use grade_tracker::config::Config;

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

fn handle_config_get(config: &Config, key: Option<String>) {
    let Some(k) = key else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        return;
    };
    match config.get(&k) {
        Some(value) => println!("{value}"),
        None => fail(format!("Unknown config key: '{k}'")),
    }
}

fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        fail(e);
    }
    if let Err(e) = config.save() {
        fail(format!("Failed to save config: {e}"));
    }
    println!("✓ Set {key} = {value}");
}

fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        fail(e);
    }
    if let Err(e) = config.save() {
        fail(format!("Failed to save config: {e}"));
    }
    println!("✓ Reset {key} to default");
}

fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    if !confirm("Are you sure you want to reset config to defaults?") {
        println!("✗ Reset cancelled");
        return;
    }
    if let Err(e) = Config::reset() {
        fail(format!("Failed to remove config file: {e}"));
    }
    println!("✓ Config reset to defaults");
}
