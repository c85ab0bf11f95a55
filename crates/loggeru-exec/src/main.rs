use clap::Parser;
use loggeru::{LogError, Logger};
use loggeru_exec::{create_logger, run, LoggeruArgs};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = LoggeruArgs::parse();
    let logger: &'static Logger = match create_logger(&args) {
        Ok(logger) => Box::leak(Box::new(logger)),
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = loggeru::install(logger) {
        eprintln!("warning: {e}");
    }

    match run(logger, &args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // critical records are already on the console
            let fatal = e
                .downcast_ref::<LogError>()
                .map_or(false, LogError::is_fatal);
            if !fatal {
                eprintln!("error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
