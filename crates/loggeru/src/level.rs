//! Log severity levels and their display tables

use colored::Color;
use std::fmt;

/// The severity of a log record. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    /// Logging at this level always escalates into a fatal error.
    Critical,
}

impl LogLevel {
    /// Every level, in ascending severity.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// The name printed between the brackets of a log line
    pub const fn name(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// The console color of the level name
    pub const fn color(self) -> Color {
        match self {
            LogLevel::Debug => Color::Cyan,
            LogLevel::Info => Color::White,
            LogLevel::Warning => Color::Yellow,
            LogLevel::Error | LogLevel::Critical => Color::Red,
        }
    }

    /// The escape sequence that switches the terminal into this level's color.
    pub fn style(self) -> String {
        format!("\x1b[{}m", self.color().to_fg_str())
    }

    /// Whether records of this level are fatal
    pub fn is_fatal(self) -> bool {
        self == LogLevel::Critical
    }
}

/// Resets any styling set by [`LogLevel::style`].
pub const STYLE_RESET: &str = "\x1b[0m";

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug | log::Level::Trace => LogLevel::Debug,
        }
    }
}
