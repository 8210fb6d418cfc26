//! CLI argument definitions for `gradetracker`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use grade_tracker::config::ConfigOverrides;
use grade_tracker::core::calendar::WeekStart;
use logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Display theme argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ThemeArg {
    /// Light background
    Light,
    /// Dark background
    Dark,
}

/// Calendar week start argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum WeekStartArg {
    /// Sunday-first weeks
    Sunday,
    /// Monday-first weeks
    Monday,
}

impl From<WeekStartArg> for WeekStart {
    fn from(arg: WeekStartArg) -> Self {
        match arg {
            WeekStartArg::Sunday => Self::Sunday,
            WeekStartArg::Monday => Self::Monday,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (e.g., `level`, `data_dir`, `target`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Reset one configuration value to its default.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum YearCommand {
    /// List years with their weighting and average.
    List,
    /// Add a year.
    Add {
        /// Year name (e.g., "Year 2")
        #[arg(value_name = "NAME")]
        name: String,
        /// Percentage contribution to the degree average
        #[arg(short, long, default_value_t = 0.0)]
        weighting: f64,
    },
    /// Rename a year or change its weighting.
    Edit {
        /// Year id or name
        #[arg(value_name = "YEAR")]
        year: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New weighting
        #[arg(short, long)]
        weighting: Option<f64>,
    },
    /// Delete a year and all its modules.
    Remove {
        /// Year id or name
        #[arg(value_name = "YEAR")]
        year: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Collapse or expand a year in the summary.
    Toggle {
        /// Year id or name
        #[arg(value_name = "YEAR")]
        year: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ModuleCommand {
    /// Add a module to a year.
    Add {
        /// Year id or name
        #[arg(value_name = "YEAR")]
        year: String,
        /// Module name
        #[arg(value_name = "NAME")]
        name: String,
        /// Credit weight
        #[arg(short, long, default_value_t = 5.0)]
        ects: f64,
    },
    /// Change a module's name, credits or moderated score.
    Edit {
        /// Year id or name
        #[arg(value_name = "YEAR")]
        year: String,
        /// Module id or name
        #[arg(value_name = "MODULE")]
        module: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New credit weight
        #[arg(short, long)]
        ects: Option<f64>,
        /// Official final mark; overrides the computed average
        #[arg(short, long, conflicts_with = "clear_moderated")]
        moderated_score: Option<f64>,
        /// Remove the moderated score
        #[arg(long)]
        clear_moderated: bool,
    },
    /// Delete a module and its assessments.
    Remove {
        /// Year id or name
        #[arg(value_name = "YEAR")]
        year: String,
        /// Module id or name
        #[arg(value_name = "MODULE")]
        module: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum AssessmentCommand {
    /// Add an assessment to a module.
    Add {
        /// Year id or name
        #[arg(value_name = "YEAR")]
        year: String,
        /// Module id or name
        #[arg(value_name = "MODULE")]
        module: String,
        /// Assessment title
        #[arg(value_name = "TITLE")]
        title: String,
        /// Percentage of the module mark
        #[arg(short, long)]
        weight: f64,
        /// Mark achieved, when already known
        #[arg(short, long)]
        grade: Option<f64>,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long, value_name = "DATE")]
        due: Option<String>,
    },
    /// Change an assessment.
    Edit {
        /// Year id or name
        #[arg(value_name = "YEAR")]
        year: String,
        /// Module id or name
        #[arg(value_name = "MODULE")]
        module: String,
        /// Assessment id or title
        #[arg(value_name = "ASSESSMENT")]
        assessment: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New weight
        #[arg(short, long)]
        weight: Option<f64>,
        /// New grade
        #[arg(short, long, conflicts_with = "clear_grade")]
        grade: Option<f64>,
        /// Mark the assessment ungraded
        #[arg(long)]
        clear_grade: bool,
        /// New due date (YYYY-MM-DD)
        #[arg(short, long, value_name = "DATE", conflicts_with = "clear_due")]
        due: Option<String>,
        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
    },
    /// Delete an assessment.
    Remove {
        /// Year id or name
        #[arg(value_name = "YEAR")]
        year: String,
        /// Module id or name
        #[arg(value_name = "MODULE")]
        module: String,
        /// Assessment id or title
        #[arg(value_name = "ASSESSMENT")]
        assessment: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ThemeSubcommand {
    /// Show the stored theme.
    Get,
    /// Store a theme.
    Set {
        /// Theme name
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Add, edit, remove or list academic years.
    Year {
        #[command(subcommand)]
        command: YearCommand,
    },
    /// Add, edit or remove modules.
    Module {
        #[command(subcommand)]
        command: ModuleCommand,
    },
    /// Add, edit or remove assessments.
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommand,
    },
    /// Show averages, classification and grade-needed targets.
    Summary {
        /// Target module percentage (defaults to config `target`)
        #[arg(short, long)]
        target: Option<f64>,
    },
    /// Show the average needed on a module's remaining work.
    Target {
        /// Year id or name
        #[arg(value_name = "YEAR")]
        year: String,
        /// Module id or name
        #[arg(value_name = "MODULE")]
        module: String,
        /// Target module percentage (defaults to config `target`)
        #[arg(value_name = "PERCENT")]
        percent: Option<f64>,
    },
    /// Export the record as CSV.
    Export {
        /// Output file (defaults to `grades.csv` in the exports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Show assessments due in a month.
    Calendar {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(short, long, value_name = "MONTH")]
        month: Option<String>,
        /// Also write an HTML calendar to this file
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,
    },
    /// Show or change the stored display theme.
    Theme {
        #[command(subcommand)]
        subcommand: Option<ThemeSubcommand>,
    },
    /// Replace the stored record with a JSON file (e.g. a browser backup).
    Import {
        /// JSON file holding an array of years
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradetracker",
    about = "Track module grades, weighted averages and degree classification",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the data directory for this run
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Override the exports directory for this run
    #[arg(long = "exports-dir", value_name = "DIR", global = true)]
    pub exports_dir: Option<PathBuf>,

    /// Override the calendar week start for this run
    #[arg(long = "week-start", value_enum, global = true)]
    pub week_start: Option<WeekStartArg>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            exports_dir: self
                .exports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            week_start: self
                .week_start
                .map(|day| WeekStart::from(day).to_string()),
            target: None,
        }
    }
}
