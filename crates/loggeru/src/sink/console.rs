use crate::sink::Sink;
use std::fmt::{Debug, Formatter};
use std::io::{self, Write};

/// Writes to the process's standard output, or to any other writer standing in for it.
///
/// Dropping a console sink never closes the underlying stream.
pub struct ConsoleSink {
    out: Box<dyn Write + Send>,
}

impl ConsoleSink {
    /// A console sink on standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// A console sink that writes into `writer` instead of standard output.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: Box::new(writer),
        }
    }

    /// Clears the terminal and moves the cursor to the top left corner.
    pub fn clear(&mut self) {
        let _ = self.out.write_all(b"\x1b[2J\x1b[1;1H");
        let _ = self.out.flush();
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Debug for ConsoleSink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

impl Sink for ConsoleSink {
    fn stream(&mut self) -> &mut dyn Write {
        &mut self.out
    }
}
