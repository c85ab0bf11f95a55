//! Output destinations for rendered log lines.
//!
//! There are exactly two kinds of sink, the [`ConsoleSink`] and the [`FileSink`]. Both
//! share the line writing behavior of the [`Sink`] trait and only differ in which stream
//! they own.

use crate::timestamp;
use std::io::Write;

mod console;
mod file;

pub use console::ConsoleSink;
pub use file::FileSink;

/// A destination that log lines are written to.
pub trait Sink {
    /// The stream lines are written to
    fn stream(&mut self) -> &mut dyn Write;

    /// Writes `text` to the stream, prefixed by the current local time if
    /// `append_timestamp` is set, then flushes.
    ///
    /// Writing is best-effort, io errors are dropped.
    fn write(&mut self, text: &str, append_timestamp: bool) {
        let stream = self.stream();
        if append_timestamp {
            let prefix = timestamp::line_prefix(timestamp::now());
            let _ = stream.write_all(prefix.as_bytes());
        }
        let _ = stream.write_all(text.as_bytes());
        let _ = stream.flush();
    }

    fn flush(&mut self) {
        let _ = self.stream().flush();
    }
}
