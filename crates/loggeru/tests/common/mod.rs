#![allow(dead_code)]

use loggeru::{Logger, LoggerBuilder};
use parking_lot::Mutex;
use std::io;
use std::io::Write;
use std::sync::Arc;

/// Console output captured in memory
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("console output should be utf-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A rich console logger writing into a buffer, with debug records enabled
pub fn captured() -> (Logger, SharedBuffer) {
    captured_with(Logger::builder().debug(true))
}

pub fn captured_with(builder: LoggerBuilder) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let logger = builder
        .console_writer(buffer.clone())
        .build()
        .expect("couldn't build logger");
    (logger, buffer)
}

/// Splits `[YYYY-MM-DD > hh:mm:ss] rest` into the timestamp and the rest
pub fn split_timestamp(line: &str) -> (&str, &str) {
    assert!(line.len() > 24, "line too short for a timestamp: {line:?}");
    let (stamp, rest) = line.split_at(24);
    let bytes = stamp.as_bytes();
    assert_eq!(bytes[0], b'[', "{line:?}");
    assert_eq!(&stamp[11..14], " > ", "{line:?}");
    assert_eq!(&stamp[22..24], "] ", "{line:?}");
    assert!(
        stamp[1..11]
            .chars()
            .chain(stamp[14..22].chars())
            .all(|c| c.is_ascii_digit() || c == '-' || c == ':'),
        "{line:?}"
    );
    (stamp, rest)
}
