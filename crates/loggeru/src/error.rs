//! Errors produced while logging

use crate::template::TemplateError;
use std::io;
use std::path::PathBuf;

/// Any error a logging call or a lifecycle operation can produce.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The message template didn't match its arguments. Nothing was written.
    #[error("couldn't format log message: {0}")]
    Format(#[from] TemplateError),
    /// The log file couldn't be opened
    #[error("couldn't open log file {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The configuration couldn't be read
    #[error("invalid logger configuration: {0}")]
    Config(String),
    /// A critical record was logged. The current operation must stop.
    #[error(transparent)]
    Fatal(#[from] FatalError),
}

impl LogError {
    /// Whether this error came from a critical record
    pub fn is_fatal(&self) -> bool {
        matches!(self, LogError::Fatal(_))
    }
}

/// Raised after a critical record was written to every active sink.
///
/// Carries the rendered, unstyled log line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .message.trim_end())]
pub struct FatalError {
    message: String,
}

impl FatalError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The complete log line, ending in a newline
    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type LogResult<T = bool> = Result<T, LogError>;
