//! The logger: owns the sinks and dispatches records to them.

use crate::config::LoggerConfig;
use crate::error::{FatalError, LogError, LogResult};
use crate::level::{LogLevel, STYLE_RESET};
use crate::record::LogRecord;
use crate::sink::{ConsoleSink, FileSink, Sink};
use crate::template;
use crate::timestamp;
use parking_lot::Mutex;
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

mod builder;

pub use builder::LoggerBuilder;

/// Leveled logger writing to an optional console sink and an optional file sink.
///
/// A new logger has no sinks and produces no output. [`initialize`](Self::initialize)
/// attaches the console sink, [`start_file_logging`](Self::start_file_logging) attaches
/// a file sink, and [`release`](Self::release) drops both again.
///
/// Every line looks like
/// ```text
/// [LEVEL] > file.rs (line 42) :: message
/// ```
/// On the console the level name is colored, and the line can be prefixed by a
/// timestamp with [`set_append_timestamp`](Self::set_append_timestamp). In the log file
/// every line is prefixed by a timestamp.
///
/// # Critical records
/// Logging a [`LogLevel::Critical`] record never succeeds. Once the record is written,
/// the call returns [`LogError::Fatal`], and the caller is expected to abandon whatever
/// it was doing, usually by propagating the error with `?`.
///
/// # Concurrency
/// Sink replacement and writes happen under a single lock, so lines from different
/// threads never interleave, and a sink is never dropped while being written to.
#[derive(Debug)]
pub struct Logger {
    sinks: Mutex<Sinks>,
    append_timestamp: AtomicBool,
    rich_console: bool,
    debug_enabled: bool,
    log_dir: Option<PathBuf>,
}

#[derive(Debug, Default)]
struct Sinks {
    console: Option<ConsoleSink>,
    file: Option<FileSink>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Creates an uninitialized logger with the default configuration
    pub fn new() -> Self {
        Self::with_config(&LoggerConfig::default())
    }

    /// Creates an uninitialized logger. The `file` setting of the config is ignored, use
    /// [`LoggerBuilder`] to have it applied.
    pub fn with_config(config: &LoggerConfig) -> Self {
        Self {
            sinks: Mutex::new(Sinks::default()),
            append_timestamp: AtomicBool::new(config.append_timestamp),
            rich_console: config.console.is_rich(),
            debug_enabled: config.debug_enabled(),
            log_dir: config.log_dir.clone(),
        }
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Attaches a console sink on standard output.
    ///
    /// Returns `false` without changing anything if the logger was already initialized.
    pub fn initialize(&self) -> bool {
        self.initialize_with(ConsoleSink::stdout())
    }

    /// Attaches the given console sink.
    ///
    /// Returns `false`, dropping `console`, if the logger was already initialized.
    pub fn initialize_with(&self, console: ConsoleSink) -> bool {
        let mut sinks = self.sinks.lock();
        if sinks.console.is_some() {
            return false;
        }
        sinks.console = Some(console);
        true
    }

    /// Drops both sinks, closing the log file if there is one.
    pub fn release(&self) {
        let mut sinks = self.sinks.lock();
        sinks.console = None;
        sinks.file = None;
    }

    pub fn is_initialized(&self) -> bool {
        self.sinks.lock().console.is_some()
    }

    /// Starts logging into `Log_DD-MM-YYYY_hh-mm-ss.log`, named after the current local
    /// time and placed in the configured log directory.
    ///
    /// Returns the path of the new log file.
    pub fn start_file_logging(&self) -> Result<PathBuf, LogError> {
        let file_name = timestamp::file_name(timestamp::now());
        let path = match &self.log_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir).map_err(|source| LogError::FileOpen {
                    path: dir.clone(),
                    source,
                })?;
                dir.join(file_name)
            }
            None => PathBuf::from(file_name),
        };
        self.start_file_logging_at(&path)?;
        Ok(path)
    }

    /// Starts logging into the file at `path`, truncating it.
    ///
    /// A file that was already being logged to is closed first, even if `path` then fails
    /// to open.
    pub fn start_file_logging_at(&self, path: impl AsRef<Path>) -> Result<(), LogError> {
        let mut sinks = self.sinks.lock();
        sinks.file = None;
        sinks.file = Some(FileSink::create(path)?);
        Ok(())
    }

    /// Closes the log file, if any.
    pub fn stop_file_logging(&self) {
        self.sinks.lock().file = None;
    }

    pub fn is_file_logging(&self) -> bool {
        self.sinks.lock().file.is_some()
    }

    /// The path of the file currently being logged to
    pub fn file_path(&self) -> Option<PathBuf> {
        self.sinks
            .lock()
            .file
            .as_ref()
            .map(|file| file.path().to_path_buf())
    }

    /// Clears the console. Does nothing if the logger isn't initialized.
    pub fn clear_console(&self) {
        if let Some(console) = &mut self.sinks.lock().console {
            console.clear();
        }
    }

    /// Sets whether console lines are prefixed by a timestamp. File lines always are.
    pub fn set_append_timestamp(&self, append: bool) {
        self.append_timestamp.store(append, Ordering::Relaxed);
    }

    pub fn append_timestamp(&self) -> bool {
        self.append_timestamp.load(Ordering::Relaxed)
    }

    /// Whether debug records are written by this logger
    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn log_debug(&self, record: &LogRecord<'_>, args: &[&dyn Display]) -> LogResult<()> {
        self.dispatch(LogLevel::Debug, record, args).map(|_| ())
    }

    pub fn log_info(&self, record: &LogRecord<'_>, args: &[&dyn Display]) -> LogResult<()> {
        self.dispatch(LogLevel::Info, record, args).map(|_| ())
    }

    pub fn log_warning(&self, record: &LogRecord<'_>, args: &[&dyn Display]) -> LogResult<()> {
        self.dispatch(LogLevel::Warning, record, args).map(|_| ())
    }

    /// Logs at the error level. Returns whether the record was written.
    pub fn log_error(&self, record: &LogRecord<'_>, args: &[&dyn Display]) -> LogResult<bool> {
        self.dispatch(LogLevel::Error, record, args)
    }

    /// Logs at the critical level, then fails with [`LogError::Fatal`].
    ///
    /// This never returns `Ok`. If the template is malformed, nothing is written and
    /// [`LogError::Format`] is returned instead.
    pub fn log_critical(
        &self,
        record: &LogRecord<'_>,
        args: &[&dyn Display],
    ) -> Result<Infallible, LogError> {
        let line = self
            .write_record(LogLevel::Critical, record, args)?
            .unwrap_or_default();
        Err(FatalError::new(line).into())
    }

    /// Logs a record at any level.
    ///
    /// Returns `Ok(false)` if the record was filtered out, `Ok(true)` if it was written,
    /// and [`LogError::Fatal`] after writing a critical record.
    pub fn dispatch(
        &self,
        level: LogLevel,
        record: &LogRecord<'_>,
        args: &[&dyn Display],
    ) -> LogResult<bool> {
        match self.write_record(level, record, args)? {
            None => Ok(false),
            Some(line) if level.is_fatal() => Err(FatalError::new(line).into()),
            Some(_) => Ok(true),
        }
    }

    /// Renders and writes the record to every sink, returning the unstyled line.
    fn write_record(
        &self,
        level: LogLevel,
        record: &LogRecord<'_>,
        args: &[&dyn Display],
    ) -> LogResult<Option<String>> {
        if level == LogLevel::Debug && !self.debug_enabled {
            return Ok(None);
        }

        // rendered before locking, argument Display impls may log themselves
        let message = if record.is_template() {
            Cow::Owned(template::render(record.message(), args)?)
        } else {
            Cow::Borrowed(record.message())
        };
        let file_name = record.file_name();
        let plain = format!(
            "[{}] > {} (line {}) :: {}\n",
            level.name(),
            file_name,
            record.line(),
            message
        );

        let mut sinks = self.sinks.lock();
        if let Some(console) = &mut sinks.console {
            if self.rich_console {
                let styled = format!(
                    "[{}{}{}] > {} (line {}) :: {}\n",
                    level.style(),
                    level.name(),
                    STYLE_RESET,
                    file_name,
                    record.line(),
                    message
                );
                console.write(&styled, self.append_timestamp());
            } else {
                console.write(&plain, self.append_timestamp());
            }
        }
        if let Some(file) = &mut sinks.file {
            file.write(&plain, true);
        }

        Ok(Some(plain))
    }

    /// Flushes both sinks
    pub(crate) fn flush_sinks(&self) {
        let mut sinks = self.sinks.lock();
        if let Some(console) = &mut sinks.console {
            console.flush();
        }
        if let Some(file) = &mut sinks.file {
            file.flush();
        }
    }
}
