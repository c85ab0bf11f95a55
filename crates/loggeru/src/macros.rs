//! Call site macros.
//!
//! Every level has a literal form, which logs its message verbatim, and a formatted form,
//! which renders the message as a template against the remaining arguments:
//!
//! ```
//! # use loggeru::{log_info, log_error, Logger};
//! let logger = Logger::new();
//! log_info!(logger, "literal {braces} are kept").unwrap();
//! let written = log_error!(logger, "code={}", 7).unwrap();
//! assert!(written);
//! ```
//!
//! The source file and line of the call are captured automatically.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_record {
    ($kind:ident, $msg:expr) => {
        $crate::LogRecord::$kind($msg, ::core::file!(), ::core::line!())
    };
}

/// Logs at the debug level. Evaluates to `Result<(), LogError>`.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $msg:expr $(,)?) => {
        $logger.log_debug(&$crate::__log_record!(literal, $msg), &[])
    };
    ($logger:expr, $fmt:expr, $($arg:expr),+ $(,)?) => {
        $logger.log_debug(
            &$crate::__log_record!(template, $fmt),
            &[$(&$arg as &dyn ::core::fmt::Display),+],
        )
    };
}

/// Logs at the info level. Evaluates to `Result<(), LogError>`.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $msg:expr $(,)?) => {
        $logger.log_info(&$crate::__log_record!(literal, $msg), &[])
    };
    ($logger:expr, $fmt:expr, $($arg:expr),+ $(,)?) => {
        $logger.log_info(
            &$crate::__log_record!(template, $fmt),
            &[$(&$arg as &dyn ::core::fmt::Display),+],
        )
    };
}

/// Logs at the warning level. Evaluates to `Result<(), LogError>`.
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $msg:expr $(,)?) => {
        $logger.log_warning(&$crate::__log_record!(literal, $msg), &[])
    };
    ($logger:expr, $fmt:expr, $($arg:expr),+ $(,)?) => {
        $logger.log_warning(
            &$crate::__log_record!(template, $fmt),
            &[$(&$arg as &dyn ::core::fmt::Display),+],
        )
    };
}

/// Logs at the error level. Evaluates to `Result<bool, LogError>`.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $msg:expr $(,)?) => {
        $logger.log_error(&$crate::__log_record!(literal, $msg), &[])
    };
    ($logger:expr, $fmt:expr, $($arg:expr),+ $(,)?) => {
        $logger.log_error(
            &$crate::__log_record!(template, $fmt),
            &[$(&$arg as &dyn ::core::fmt::Display),+],
        )
    };
}

/// Logs at the critical level. Evaluates to `Result<Infallible, LogError>`, which is
/// always an error.
#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $msg:expr $(,)?) => {
        $logger.log_critical(&$crate::__log_record!(literal, $msg), &[])
    };
    ($logger:expr, $fmt:expr, $($arg:expr),+ $(,)?) => {
        $logger.log_critical(
            &$crate::__log_record!(template, $fmt),
            &[$(&$arg as &dyn ::core::fmt::Display),+],
        )
    };
}

/// Checks a condition, logging and returning early if it doesn't hold.
///
/// Without a message, a failed check logs `ASSERTION FAILED: <condition> was false` at the
/// error level and returns from the enclosing function, which must return `()`.
///
/// With a message, a failed check logs the message at the critical level and returns the
/// resulting fatal error from the enclosing function, converted with `Into`.
///
/// ```
/// # use loggeru::{log_assert, LogError, Logger};
/// fn checked(logger: &Logger, len: usize) -> Result<usize, LogError> {
///     log_assert!(logger, len > 0, "length was {}", len);
///     Ok(len)
/// }
///
/// let logger = Logger::new();
/// assert!(checked(&logger, 0).unwrap_err().is_fatal());
/// ```
#[macro_export]
macro_rules! log_assert {
    ($logger:expr, $cond:expr $(,)?) => {
        if !$cond {
            let _ = $crate::log_error!(
                $logger,
                ::core::concat!("ASSERTION FAILED: ", ::core::stringify!($cond), " was false")
            );
            return;
        }
    };
    ($logger:expr, $cond:expr, $($msg:tt)+) => {
        if !$cond {
            return match $crate::log_critical!($logger, $($msg)+) {
                ::core::result::Result::Err(e) => ::core::result::Result::Err(e.into()),
                ::core::result::Result::Ok(never) => match never {},
            };
        }
    };
}
