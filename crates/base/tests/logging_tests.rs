use base::logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};
use log::Log;
use std::fs;

fn record_args<'a>(args: std::fmt::Arguments<'a>, level: log::Level, line: u32) -> log::Record<'a> {
    log::RecordBuilder::new()
        .level(level)
        .target("test")
        .file(Some("test.rs"))
        .line(Some(line))
        .args(args)
        .build()
}

#[test]
fn test_stdout_logger_implements_log_trait() {
    let logger = StdoutLogger;
    let metadata = log::MetadataBuilder::new()
        .level(log::Level::Info)
        .target("test")
        .build();
    assert!(logger.enabled(&metadata));

    logger.log(&record_args(format_args!("test message"), log::Level::Info, 42));
    logger.flush();
}

#[test]
fn test_file_logger_writes_to_file() {
    let test_dir = std::env::temp_dir().join(format!("pinch-log-test-{}-write", std::process::id()));
    let _ = fs::remove_dir_all(&test_dir);

    let logger = FileLogger::new(&test_dir).expect("Failed to create FileLogger");
    logger.log(&record_args(format_args!("volume sink unavailable"), log::Level::Error, 100));
    logger.flush();

    let entries: Vec<_> = fs::read_dir(&test_dir)
        .expect("Failed to read test directory")
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(entries.len(), 1, "Should have exactly one log file");

    let content = fs::read_to_string(entries[0].path()).expect("Failed to read log file");
    assert!(content.contains("[ERROR]"));
    assert!(content.contains("thread:"));
    assert!(content.contains("test.rs:100"));
    assert!(content.contains("volume sink unavailable"));
    assert!(content.ends_with('\n'));

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn test_init_stdout_logger_sets_global_logger() {
    // log::set_logger only succeeds once per process; repeated calls are no-ops
    init_stdout_logger();
    init_stdout_logger();

    assert!(log::logger().enabled(
        &log::MetadataBuilder::new()
            .level(log::Level::Info)
            .target("test")
            .build()
    ));
    log::info!("Test message from global logger");
}

#[test]
fn test_init_file_logger_invalid_dir_returns_error() {
    let result = init_file_logger("/proc/nonexistent/path");
    assert!(result.is_err());
}
