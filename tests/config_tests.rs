//! Integration tests for configuration management

use grade_tracker::config::{Config, ConfigOverrides};
use grade_tracker::core::calendar::WeekStart;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.data_dir.is_empty(),
        "Default data_dir should not be empty"
    );
    assert!(
        !config.paths.exports_dir.is_empty(),
        "Default exports_dir should not be empty"
    );
    assert!((config.target() - 70.0).abs() < f64::EPSILON);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
data_dir = "./data"
exports_dir = "./exports"

[calendar]
week_start = "monday"

[grading]
target = 60.0
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_dir, "./data");
    assert_eq!(config.paths.exports_dir, "./exports");
    assert_eq!(config.week_start(), WeekStart::Monday);
    assert!((config.target() - 60.0).abs() < f64::EPSILON);
}

#[test]
fn test_config_from_toml_partial() {
    // Missing fields within sections use defaults
    let toml_str = r#"
[logging]
level = "error"

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.data_dir, "");
    assert!((config.grading.target - 70.0).abs() < f64::EPSILON);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[paths]
data_dir = "$GRADE_TRACKER/data"
exports_dir = "$GRADE_TRACKER/exports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");
    let base = Config::get_gradetracker_dir();

    assert!(!config.paths.data_dir.contains("$GRADE_TRACKER"));
    assert_eq!(config.data_dir(), base.join("data"));
    assert_eq!(config.exports_dir(), base.join("exports"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level"), Some("debug".to_string()));

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose"), Some("true".to_string()));

    config
        .set("data_dir", "/srv/grades")
        .expect("Failed to set data_dir");
    assert_eq!(config.get("data-dir"), Some("/srv/grades".to_string()));

    config.set("target", "65.5").expect("Failed to set target");
    assert_eq!(config.get("target"), Some("65.5".to_string()));

    assert!(config.set("verbose", "sometimes").is_err());
    assert!(config.set("target", "-1").is_err());
    assert!(config.set("nonexistent", "value").is_err());
    assert_eq!(config.get("nonexistent"), None);
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("week_start", "monday").expect("Failed to set");
    config.set("target", "40").expect("Failed to set");

    config.unset("week_start", &defaults).expect("Failed to unset");
    config.unset("target", &defaults).expect("Failed to unset");

    assert_eq!(config.calendar.week_start, defaults.calendar.week_start);
    assert!((config.target() - defaults.target()).abs() < f64::EPSILON);
    assert!(config.unset("nonexistent", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("week_start", "monday").expect("Failed to set");

    // Save to the temp location rather than the user config
    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.week_start(), WeekStart::Monday);
    assert_eq!(loaded.paths.data_dir, config.paths.data_dir);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        data_dir: Some("./custom_data".to_string()),
        exports_dir: Some("./custom_exports".to_string()),
        week_start: Some("monday".to_string()),
        target: Some(55.0),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.data_dir(), PathBuf::from("./custom_data"));
    assert_eq!(config.exports_dir(), PathBuf::from("./custom_exports"));
    assert_eq!(config.week_start(), WeekStart::Monday);
    assert!((config.target() - 55.0).abs() < f64::EPSILON);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.paths.data_dir.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.data_dir, before);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[calendar]"));
    assert!(display_str.contains("[grading]"));
    assert!(display_str.contains("week_start"));
    assert!(display_str.contains("target"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"

[paths]
data_dir = ""
exports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.paths.data_dir, defaults.paths.data_dir);
    assert_eq!(config.calendar.week_start, defaults.calendar.week_start);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[paths]
data_dir = "/my/data"
exports_dir = "/my/exports"

[calendar]
week_start = "monday"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(!config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.data_dir, "/my/data");
    assert_eq!(config.calendar.week_start, "monday");
}

#[test]
fn test_get_gradetracker_dir() {
    let dir = Config::get_gradetracker_dir();
    assert!(dir.to_string_lossy().contains("gradetracker"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
