//! The command line front end of loggeru

use anyhow::Context;
use loggeru::{LogRecord, Logger};

pub mod cli;

pub use cli::{Command, LoggeruArgs};

/// Builds the logger described by `args`
pub fn create_logger(args: &LoggeruArgs) -> anyhow::Result<Logger> {
    let config = args
        .logging
        .logger_config()
        .context("couldn't load logger settings")?;
    Logger::builder()
        .config(config)
        .build()
        .context("couldn't create logger")
}

/// Runs the command on `logger`.
///
/// Emitting a critical record always fails with the resulting fatal error.
pub fn run(logger: &Logger, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Emit {
            level,
            message,
            args,
        } => {
            let record = if args.is_empty() {
                LogRecord::literal(message.as_str(), file!(), line!())
            } else {
                LogRecord::template(message.as_str(), file!(), line!())
            };
            logger.dispatch((*level).into(), &record, &command.template_args())?;
        }
        Command::Clear => logger.clear_console(),
    }
    Ok(())
}

/// Creates the logger described by `args` and runs its command.
pub fn execute(args: &LoggeruArgs) -> anyhow::Result<()> {
    let logger = create_logger(args)?;
    run(&logger, &args.command)
}
