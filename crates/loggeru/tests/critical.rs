mod common;

use common::{captured, split_timestamp};
use loggeru::{log_assert, log_critical, log_info, LogError, LogLevel, LogRecord};
use std::fs;
use tempfile::tempdir;

fn abort_midway(logger: &loggeru::Logger, reached: &mut bool) -> Result<(), LogError> {
    log_critical!(logger, "disk {} is gone", "sda")?;
    *reached = true;
    Ok(())
}

#[test]
fn critical_writes_everywhere_then_fails() {
    let temp_dir = tempdir().expect("couldn't make temp directory");
    let path = temp_dir.path().join("out.log");
    let (logger, console) = captured();
    logger.start_file_logging_at(&path).unwrap();

    let mut reached = false;
    let err = abort_midway(&logger, &mut reached).unwrap_err();
    assert!(!reached, "code after a critical record must not run");

    let fatal = match err {
        LogError::Fatal(fatal) => fatal,
        other => panic!("expected a fatal error, got {other}"),
    };
    assert!(fatal.message().starts_with("[CRITICAL] > critical.rs (line "));
    assert!(fatal.message().ends_with(":: disk sda is gone\n"));
    assert_eq!(fatal.to_string(), fatal.message().trim_end());

    let contents = fs::read_to_string(&path).unwrap();
    let (_, rest) = split_timestamp(contents.trim_end());
    assert_eq!(format!("{rest}\n"), fatal.message());

    assert!(console
        .contents()
        .starts_with("[\x1b[31mCRITICAL\x1b[0m] > critical.rs"));
}

#[test]
fn critical_through_dispatch_is_fatal() {
    let (logger, _console) = captured();
    let err = logger
        .dispatch(
            LogLevel::Critical,
            &LogRecord::literal("stop", "main.rs", 3),
            &[],
        )
        .unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn malformed_critical_is_a_format_error() {
    let (logger, console) = captured();
    let err = log_critical!(logger, "{} {}", 1).unwrap_err();
    assert!(matches!(err, LogError::Format(_)));
    assert_eq!(console.contents(), "");
}

fn checked_unit(logger: &loggeru::Logger, value: i32, reached: &mut bool) {
    log_assert!(logger, value > 0);
    *reached = true;
}

fn checked_result(logger: &loggeru::Logger, value: i32) -> Result<i32, LogError> {
    log_assert!(logger, value > 0, "value must be positive, was {}", value);
    Ok(value)
}

#[test]
fn assert_without_message_logs_an_error_and_returns() {
    let (logger, console) = captured();
    let mut reached = false;
    checked_unit(&logger, -1, &mut reached);
    assert!(!reached);
    assert!(console
        .contents()
        .ends_with(":: ASSERTION FAILED: value > 0 was false\n"));
    assert!(console.contents().contains("ERROR"));

    checked_unit(&logger, 1, &mut reached);
    assert!(reached);
}

#[test]
fn assert_with_message_is_fatal() {
    let (logger, console) = captured();
    assert_eq!(checked_result(&logger, 3).unwrap(), 3);
    assert_eq!(console.contents(), "");

    let err = checked_result(&logger, -3).unwrap_err();
    assert!(err.is_fatal());
    assert!(console
        .contents()
        .ends_with(":: value must be positive, was -3\n"));
    log_info!(logger, "logger still usable").unwrap();
}
