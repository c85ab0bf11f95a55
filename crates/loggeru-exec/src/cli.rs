use std::fmt::Display;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use loggeru::{ConsoleMode, FileTarget, LogError, LogLevel, LoggerConfig};

/// Writes log records from the command line.
///
/// Messages given without arguments are logged verbatim. Messages followed by arguments
/// are templates, where `{}` and `{N}` are replaced by the arguments.
#[derive(Debug, Parser, Clone)]
#[clap(name = "loggeru")]
#[clap(version, author)]
#[clap(term_width = 64)]
pub struct LoggeruArgs {
    #[clap(flatten)]
    pub logging: LoggingArgs,

    #[clap(subcommand)]
    pub command: Command,
}

impl LoggeruArgs {
    /// Simulate creating the args from the command line
    pub fn try_command_line<S: AsRef<str>>(cmd: S) -> Result<Self, clap::Error> {
        Self::try_parse_from(
            std::iter::once("loggeru").chain(cmd.as_ref().split_whitespace()),
        )
    }
}

/// Logger settings
#[derive(Debug, Clone, Default, Args)]
#[clap(next_help_heading = "Logging")]
pub struct LoggingArgs {
    /// Read logger settings from a toml file. Other options override it.
    #[clap(long, short = 'c')]
    #[clap(global = true)]
    #[clap(display_order = 1)]
    pub config: Option<PathBuf>,

    /// The console output mode.
    #[clap(long, value_enum)]
    #[clap(global = true)]
    #[clap(display_order = 2)]
    pub console: Option<ConsoleArg>,

    /// Prefix console lines with a timestamp
    #[clap(long, short = 't')]
    #[clap(global = true)]
    #[clap(display_order = 3)]
    pub timestamp: bool,

    /// Also log into a file. Without a path, the file is named after the current time.
    /// A path must be given as `--log-file=PATH`.
    #[clap(long, value_name = "PATH", require_equals = true)]
    #[clap(global = true)]
    #[clap(display_order = 4)]
    pub log_file: Option<Option<PathBuf>>,

    /// Directory generated log file names are placed in
    #[clap(long, value_name = "DIR")]
    #[clap(global = true)]
    #[clap(display_order = 5)]
    pub log_dir: Option<PathBuf>,

    /// Drop debug records
    #[clap(long)]
    #[clap(conflicts_with = "debug")]
    #[clap(global = true)]
    #[clap(display_order = 6)]
    pub no_debug: bool,

    /// Keep debug records, even in release builds
    #[clap(long)]
    #[clap(global = true)]
    #[clap(display_order = 7)]
    pub debug: bool,
}

impl LoggingArgs {
    /// The logger config, read from the config file if one was given, with the command
    /// line options applied over it.
    pub fn logger_config(&self) -> Result<LoggerConfig, LogError> {
        let mut config = match &self.config {
            Some(path) => LoggerConfig::from_file(path)?,
            None => LoggerConfig::default(),
        };

        if let Some(console) = self.console {
            config.console = console.into();
        }
        if self.timestamp {
            config.append_timestamp = true;
        }
        match &self.log_file {
            Some(Some(path)) => config.file = Some(FileTarget::Path(path.clone())),
            Some(None) => config.file = Some(FileTarget::Default),
            None => {}
        }
        if let Some(dir) = &self.log_dir {
            config.log_dir = Some(dir.clone());
        }
        if self.debug {
            config.debug = Some(true);
        } else if self.no_debug {
            config.debug = Some(false);
        }
        Ok(config)
    }
}

#[derive(Debug, Copy, Clone, ValueEnum, Eq, PartialEq)]
pub enum ConsoleArg {
    Auto,
    Rich,
    Plain,
}

impl From<ConsoleArg> for ConsoleMode {
    fn from(arg: ConsoleArg) -> Self {
        match arg {
            ConsoleArg::Auto => ConsoleMode::Auto,
            ConsoleArg::Rich => ConsoleMode::Rich,
            ConsoleArg::Plain => ConsoleMode::Plain,
        }
    }
}

#[derive(Debug, Copy, Clone, ValueEnum, Eq, PartialEq)]
pub enum LevelArg {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl From<LevelArg> for LogLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Debug => LogLevel::Debug,
            LevelArg::Info => LogLevel::Info,
            LevelArg::Warning => LogLevel::Warning,
            LevelArg::Error => LogLevel::Error,
            LevelArg::Critical => LogLevel::Critical,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Log a single message
    Emit {
        /// The level to log at
        #[clap(value_enum)]
        level: LevelArg,
        /// The message, or a template if arguments follow it
        message: String,
        /// Arguments for the template
        args: Vec<String>,
    },
    /// Clear the console
    Clear,
}

impl Command {
    /// The template arguments of an emit command
    pub fn template_args(&self) -> Vec<&dyn Display> {
        match self {
            Command::Emit { args, .. } => args.iter().map(|arg| arg as &dyn Display).collect(),
            Command::Clear => vec![],
        }
    }
}
