//! Tests for verbose output and the file sink.

use logger::{enable_verbose, error, info, set_level, verbose, Level};

#[test]
fn verbose_respects_runtime_flag() {
    verbose!("This should not appear");
    enable_verbose();
    verbose!("This should appear: verbose test {}", 42);
}

#[cfg(feature = "file-logging")]
#[test]
fn file_sink_receives_tagged_messages() {
    use logger::init_file_logging;
    use std::fs;

    let log_path = std::env::temp_dir()
        .join(format!("gradetracker-logger-{}", std::process::id()))
        .join("sink.log");
    let _ = fs::remove_file(&log_path);

    assert!(init_file_logging(&log_path));
    set_level(Level::Info);
    info!("saved record with {} years", 3);
    error!("store unavailable");

    let content = fs::read_to_string(&log_path).expect("log file should exist");
    assert!(content.contains("[INFO] saved record with 3 years"));
    assert!(content.contains("[ERROR] store unavailable"));

    let _ = fs::remove_dir_all(log_path.parent().expect("log dir"));
}
