//! Logger configuration, either built in code or read from a toml file.
//!
//! ```toml
//! append_timestamp = true
//! console = "plain"
//! debug = false
//! log_dir = "logs"
//! file = "default"
//! ```

use crate::error::LogError;
use atty::Stream;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How level names are styled on the console
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleMode {
    /// Rich if standard output is a terminal, plain otherwise
    Auto,
    Rich,
    Plain,
}

impl Default for ConsoleMode {
    fn default() -> Self {
        ConsoleMode::Rich
    }
}

impl ConsoleMode {
    /// Resolves [`ConsoleMode::Auto`] against the current standard output
    pub fn resolve(self) -> Self {
        match &self {
            ConsoleMode::Auto => {
                if atty::is(Stream::Stdout) {
                    ConsoleMode::Rich
                } else {
                    ConsoleMode::Plain
                }
            }
            ConsoleMode::Rich => self,
            ConsoleMode::Plain => self,
        }
    }

    /// Whether, once resolved, level names get colored
    pub fn is_rich(self) -> bool {
        self.resolve() == ConsoleMode::Rich
    }
}

impl FromStr for ConsoleMode {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ConsoleMode::Auto),
            "rich" => Ok(ConsoleMode::Rich),
            "plain" => Ok(ConsoleMode::Plain),
            other => Err(LogError::Config(format!("unknown console mode {other:?}"))),
        }
    }
}

/// Which file, if any, to log into as soon as the logger is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTarget {
    /// A generated `Log_DD-MM-YYYY_hh-mm-ss.log` in the log directory
    Default,
    Path(PathBuf),
}

impl<'de> Deserialize<'de> for FileTarget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(if value == "default" {
            FileTarget::Default
        } else {
            FileTarget::Path(PathBuf::from(value))
        })
    }
}

/// Settings used to build a [`Logger`](crate::Logger).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Prefix console lines with a timestamp. File lines always have one.
    pub append_timestamp: bool,
    pub console: ConsoleMode,
    /// Overrides whether debug records are written. When unset, they are written only in
    /// debug builds.
    pub debug: Option<bool>,
    /// Directory that generated log file names are placed in. Defaults to the current
    /// directory.
    pub log_dir: Option<PathBuf>,
    pub file: Option<FileTarget>,
}

impl LoggerConfig {
    /// Whether debug records get written with this config
    pub fn debug_enabled(&self) -> bool {
        self.debug.unwrap_or(cfg!(debug_assertions))
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, LogError> {
        toml::from_str(toml).map_err(|e| LogError::Config(e.to_string()))
    }

    /// Reads the config from a toml file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| LogError::Config(format!("couldn't read {path:?}: {e}")))?;
        Self::from_toml_str(&contents)
    }
}
