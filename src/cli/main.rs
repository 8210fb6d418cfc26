//! Command-line interface entry point for `gradetracker`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use grade_tracker::config::Config;
use logger::{debug, enable_debug, enable_verbose, info, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }
    debug!("gradetracker {}", grade_tracker::get_version());

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Year { command } => commands::year::run(command, &config),
        Command::Module { command } => commands::module::run(command, &config),
        Command::Assessment { command } => commands::assessment::run(command, &config),
        Command::Summary { target } => commands::summary::run(target, &config),
        Command::Target {
            year,
            module,
            percent,
        } => commands::target::run(&year, &module, percent, &config),
        Command::Export { output } => commands::export::run(output.as_deref(), &config),
        Command::Calendar { month, html } => {
            commands::calendar::run(month.as_deref(), html.as_deref(), &config);
        }
        Command::Theme { subcommand } => commands::theme::run(subcommand, &config),
        Command::Import { file, yes } => commands::import::run(&file, yes, &config),
    }
}
