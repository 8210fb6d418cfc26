//! Core module: domain model and everything computed from it

pub mod calendar;
pub mod config;
pub mod error;
pub mod export;
pub mod grades;
pub mod models;
pub mod storage;
pub mod summary;

/// Returns the current version of the `grade_tracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
