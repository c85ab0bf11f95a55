//! Routes records of the `log` crate through a [`Logger`].

use crate::level::LogLevel;
use crate::logger::Logger;
use crate::record::LogRecord;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        LogLevel::from(metadata.level()) != LogLevel::Debug || self.debug_enabled()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        let file = record.file().unwrap_or("<unknown>");
        let line = record.line().unwrap_or(0);
        // already rendered by the facade, a literal can't fail
        let _ = self.dispatch(
            record.level().into(),
            &LogRecord::literal(message, file, line),
            &[],
        );
    }

    fn flush(&self) {
        self.flush_sinks();
    }
}

/// Makes `logger` the target of the `log` crate's macros.
///
/// Trace records are logged as debug records. The maximum level is lowered to info when
/// the logger doesn't write debug records.
pub fn install(logger: &'static Logger) -> Result<(), SetLoggerError> {
    log::set_logger(logger)?;
    log::set_max_level(if logger.debug_enabled() {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    });
    Ok(())
}
