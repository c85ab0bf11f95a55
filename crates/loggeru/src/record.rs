//! The value describing a single logging call

use std::borrow::Cow;
use std::path::Path;

/// One logging call: what to print and where it came from.
///
/// A record is either a *template*, rendered against the arguments passed next to it,
/// or a *literal*, printed verbatim even if it contains braces. The logging macros
/// pick the right kind depending on whether arguments were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord<'a> {
    message: Cow<'a, str>,
    file: Cow<'a, str>,
    line: u32,
    format: bool,
}

impl<'a> LogRecord<'a> {
    /// A record whose message is used as-is.
    pub fn literal(message: impl Into<Cow<'a, str>>, file: impl Into<Cow<'a, str>>, line: u32) -> Self {
        Self {
            message: message.into(),
            file: file.into(),
            line,
            format: false,
        }
    }

    /// A record whose message is a template.
    pub fn template(message: impl Into<Cow<'a, str>>, file: impl Into<Cow<'a, str>>, line: u32) -> Self {
        Self {
            message: message.into(),
            file: file.into(),
            line,
            format: true,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Whether the message must be rendered against arguments
    pub fn is_template(&self) -> bool {
        self.format
    }

    /// The file name of the originating source, without any directories.
    pub fn file_name(&self) -> Cow<'_, str> {
        match Path::new(self.file.as_ref()).file_name() {
            Some(name) => name.to_string_lossy(),
            None => Cow::Borrowed(self.file.as_ref()),
        }
    }
}
