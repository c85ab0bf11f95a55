use crate::config::{ConsoleMode, FileTarget, LoggerConfig};
use crate::error::LogError;
use crate::logger::Logger;
use crate::sink::ConsoleSink;
use std::io::Write;
use std::path::PathBuf;

/// Builds an initialized [`Logger`].
///
/// ```no_run
/// # use loggeru::{Logger, ConsoleMode};
/// let logger = Logger::builder()
///     .console_mode(ConsoleMode::Auto)
///     .append_timestamp(true)
///     .log_file("app.log")
///     .build()?;
/// # Ok::<(), loggeru::LogError>(())
/// ```
#[derive(Debug, Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    console: Option<ConsoleSink>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every setting with the ones in `config`
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn append_timestamp(mut self, append: bool) -> Self {
        self.config.append_timestamp = append;
        self
    }

    pub fn console_mode(mut self, mode: ConsoleMode) -> Self {
        self.config.console = mode;
        self
    }

    /// Forces debug records on or off, regardless of the build profile
    pub fn debug(mut self, enabled: bool) -> Self {
        self.config.debug = Some(enabled);
        self
    }

    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.log_dir = Some(dir.into());
        self
    }

    /// Log into the file at `path` once built
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.file = Some(FileTarget::Path(path.into()));
        self
    }

    /// Log into a file with a generated name once built
    pub fn default_log_file(mut self) -> Self {
        self.config.file = Some(FileTarget::Default);
        self
    }

    /// Writes console output into `writer` instead of standard output
    pub fn console_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.console = Some(ConsoleSink::new(writer));
        self
    }

    /// Creates the logger, attaches the console sink, and opens the log file if one was
    /// requested.
    pub fn build(self) -> Result<Logger, LogError> {
        let logger = Logger::with_config(&self.config);
        logger.initialize_with(self.console.unwrap_or_default());
        match self.config.file {
            Some(FileTarget::Default) => {
                logger.start_file_logging()?;
            }
            Some(FileTarget::Path(path)) => logger.start_file_logging_at(path)?,
            None => {}
        }
        Ok(logger)
    }
}
