//! Leveled logging to the console and to a log file.
//!
//! A [`Logger`] fans every record out to an optional console sink, which colors the level
//! name, and an optional file sink, which prefixes every line with a timestamp. Records
//! are logged with the level macros ([`log_info!`], [`log_error!`], ...), which capture
//! the calling file and line.
//!
//! ```
//! use loggeru::{log_critical, log_info, LogError, Logger};
//!
//! fn run(logger: &Logger) -> Result<(), LogError> {
//!     log_info!(logger, "starting {} workers", 4)?;
//!     log_critical!(logger, "out of workers")?;
//!     unreachable!("critical records always fail")
//! }
//!
//! let logger = Logger::new();
//! assert!(run(&logger).unwrap_err().is_fatal());
//! ```
//!
//! Critical records are fatal: once written, the call returns [`LogError::Fatal`] and the
//! caller must stop what it was doing.

use once_cell::sync::Lazy;

pub mod config;
pub mod error;
mod facade;
pub mod level;
mod logger;
mod macros;
pub mod record;
pub mod sink;
pub mod template;
pub mod timestamp;

pub use config::{ConsoleMode, FileTarget, LoggerConfig};
pub use error::{FatalError, LogError, LogResult};
pub use facade::install;
pub use level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use record::LogRecord;

static GLOBAL: Lazy<Logger> = Lazy::new(Logger::new);

/// The process wide logger.
///
/// It starts out uninitialized, call [`Logger::initialize`] on it before use.
pub fn global() -> &'static Logger {
    &GLOBAL
}

/// Initializes the process wide logger and makes it the target of the `log` crate.
pub fn init_global() -> Result<&'static Logger, log::SetLoggerError> {
    let logger = global();
    logger.initialize();
    install(logger)?;
    Ok(logger)
}
