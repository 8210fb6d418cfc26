//! Library for `gradetracker`
//! Data model, grade engine, persistence, CSV export and calendar arithmetic
//! shared by the CLI.

pub mod core;

pub use crate::core::{config, error::Error, error::Result, get_version};
pub use logger::{debug, error, info, verbose, warn, Level};
