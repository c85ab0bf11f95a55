use crate::error::LogError;
use crate::sink::Sink;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes to a log file it exclusively owns.
///
/// The file is truncated when the sink is created and closed when the sink is dropped.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();
        match File::create(&path) {
            Ok(file) => Ok(Self { path, file }),
            Err(source) => Err(LogError::FileOpen { path, source }),
        }
    }

    /// The path the file was opened at
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn stream(&mut self) -> &mut dyn Write {
        &mut self.file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn create_truncates() {
        let temp_dir = tempdir().expect("couldn't make temp directory");
        let path = temp_dir.path().join("out.log");
        std::fs::write(&path, "stale contents").unwrap();

        let mut sink = FileSink::create(&path).expect("couldn't create file sink");
        sink.write("fresh\n", false);
        drop(sink);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn open_failure_is_reported() {
        let temp_dir = tempdir().expect("couldn't make temp directory");
        let path = temp_dir.path().join("missing").join("out.log");

        let err = FileSink::create(&path).expect_err("parent directory doesn't exist");
        match err {
            LogError::FileOpen { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
