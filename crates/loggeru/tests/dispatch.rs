mod common;

use common::{captured, captured_with};
use loggeru::level::STYLE_RESET;
use loggeru::{
    log_debug, log_error, log_info, log_warning, ConsoleMode, LogError, LogLevel, LogRecord,
    Logger,
};
use loggeru::template::TemplateError;

#[test]
fn console_line_example() {
    let (logger, console) = captured();
    logger
        .log_info(&LogRecord::literal("Hello", "src/test.cpp", 42), &[])
        .unwrap();

    let contents = console.contents();
    assert!(
        contents.ends_with("] > test.cpp (line 42) :: Hello\n"),
        "{contents:?}"
    );
    assert!(!logger.is_file_logging());
}

#[test]
fn literals_are_routed_verbatim_at_every_level() {
    let (logger, console) = captured();
    let message = "50% done {not a placeholder} \\n";

    for level in LogLevel::ALL {
        let record = LogRecord::literal(message, "lib.rs", 7);
        let result = logger.dispatch(level, &record, &[]);
        if level == LogLevel::Critical {
            assert!(result.unwrap_err().is_fatal());
        } else {
            assert!(result.unwrap());
        }
    }

    let lines = console.lines();
    assert_eq!(lines.len(), LogLevel::ALL.len());
    for (line, level) in lines.iter().zip(LogLevel::ALL) {
        assert_eq!(
            line,
            &format!(
                "[{}{}{}] > lib.rs (line 7) :: {}",
                level.style(),
                level.name(),
                STYLE_RESET,
                message
            )
        );
    }
}

#[test]
fn level_name_is_wrapped_in_color_codes() {
    let (logger, console) = captured();
    log_warning!(logger, "careful").unwrap();
    log_error!(logger, "broken").unwrap();

    let lines = console.lines();
    assert!(lines[0].starts_with("[\x1b[33mWARNING\x1b[0m] > "), "{:?}", lines[0]);
    assert!(lines[1].starts_with("[\x1b[31mERROR\x1b[0m] > "), "{:?}", lines[1]);
}

#[test]
fn plain_console_has_no_escape_codes() {
    let (logger, console) = captured_with(Logger::builder().console_mode(ConsoleMode::Plain));
    log_info!(logger, "quiet").unwrap();

    let contents = console.contents();
    assert!(contents.starts_with("[INFO] > dispatch.rs (line "), "{contents:?}");
    assert!(!contents.contains('\x1b'));
}

#[test]
fn formatted_messages_match_format() {
    let (logger, console) = captured();
    let name = "worker";
    log_info!(logger, "{} finished {} jobs in {:.1}s", name, 12, 3.25).unwrap();

    let line = console.contents();
    let expected = format!("{} finished {} jobs in {:.1}s", name, 12, 3.25);
    assert!(line.ends_with(&format!(":: {expected}\n")), "{line:?}");
}

#[test]
fn macros_capture_the_call_site() {
    let (logger, console) = captured();
    let line = line!() + 1;
    log_info!(logger, "here").unwrap();

    assert!(
        console
            .contents()
            .ends_with(&format!("] > dispatch.rs (line {line}) :: here\n")),
        "{:?}",
        console.contents()
    );
}

#[test]
fn template_mismatch_is_an_error_and_writes_nothing() {
    let (logger, console) = captured();

    let err = log_info!(logger, "{} and {}", 1).unwrap_err();
    assert!(matches!(
        err,
        LogError::Format(TemplateError::MissingArgument { index: 1, given: 1 })
    ));

    let err = log_error!(logger, "{}", 1, 2).unwrap_err();
    assert!(matches!(
        err,
        LogError::Format(TemplateError::UnusedArguments { .. })
    ));

    assert_eq!(console.contents(), "");
}

#[test]
fn debug_records_follow_the_debug_setting() {
    let (logger, console) = captured_with(Logger::builder().debug(false));
    log_debug!(logger, "hidden").unwrap();
    assert!(!logger
        .dispatch(LogLevel::Debug, &LogRecord::literal("hidden", "a.rs", 1), &[])
        .unwrap());
    assert_eq!(console.contents(), "");

    let (logger, console) = captured_with(Logger::builder().debug(true));
    log_debug!(logger, "shown").unwrap();
    assert!(console.contents().contains("DEBUG"));
}

#[test]
fn debug_records_follow_the_build_profile_by_default() {
    let buffer = common::SharedBuffer::default();
    let logger = Logger::builder()
        .console_writer(buffer.clone())
        .build()
        .unwrap();
    log_debug!(logger, "profile dependent").unwrap();

    assert_eq!(logger.debug_enabled(), cfg!(debug_assertions));
    assert_eq!(buffer.contents().is_empty(), !cfg!(debug_assertions));
}

#[test]
fn console_timestamp_is_opt_in() {
    let (logger, console) = captured();
    assert!(!logger.append_timestamp());
    log_info!(logger, "no stamp").unwrap();
    logger.set_append_timestamp(true);
    log_info!(logger, "stamped").unwrap();

    let lines = console.lines();
    assert!(lines[0].starts_with("[\x1b["), "{:?}", lines[0]);
    let (_, rest) = common::split_timestamp(&lines[1]);
    assert!(rest.starts_with("[\x1b["), "{rest:?}");
    assert!(rest.ends_with(":: stamped"));
}

#[test]
fn uninitialized_logger_writes_nothing() {
    let logger = Logger::new();
    assert!(!logger.is_initialized());
    assert!(log_error!(logger, "into the void").unwrap());
}

#[test]
fn initialize_is_idempotent() {
    let (logger, console) = captured();
    let other = common::SharedBuffer::default();
    assert!(!logger.initialize_with(loggeru::sink::ConsoleSink::new(other.clone())));

    log_info!(logger, "still here").unwrap();
    assert!(console.contents().contains("still here"));
    assert_eq!(other.contents(), "");
}

#[test]
fn release_detaches_console() {
    let (logger, console) = captured();
    logger.release();
    assert!(!logger.is_initialized());
    log_info!(logger, "gone").unwrap();
    assert_eq!(console.contents(), "");

    // releasing twice is fine
    logger.release();
}

#[test]
fn clear_console() {
    let (logger, console) = captured();
    logger.clear_console();
    assert_eq!(console.contents(), "\x1b[2J\x1b[1;1H");

    logger.release();
    logger.clear_console();
}

#[test]
fn concurrent_lines_do_not_interleave() {
    let (logger, console) = captured();
    std::thread::scope(|scope| {
        for worker in 0..4 {
            let logger = &logger;
            scope.spawn(move || {
                for i in 0..50 {
                    log_info!(logger, "worker {} line {}", worker, i).unwrap();
                }
            });
        }
    });

    let lines = console.lines();
    assert_eq!(lines.len(), 200);
    for line in lines {
        assert!(line.starts_with("[\x1b[37mINFO\x1b[0m] > dispatch.rs (line "), "{line:?}");
        assert!(line.contains(":: worker "));
    }
}
