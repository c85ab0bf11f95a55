mod common;

use common::SharedBuffer;
use loggeru::{ConsoleMode, Logger};
use once_cell::sync::Lazy;

static BUFFER: Lazy<SharedBuffer> = Lazy::new(SharedBuffer::default);
static LOGGER: Lazy<Logger> = Lazy::new(|| {
    Logger::builder()
        .console_mode(ConsoleMode::Plain)
        .debug(false)
        .console_writer(BUFFER.clone())
        .build()
        .expect("couldn't build logger")
});

#[test]
fn log_macros_are_routed_through_the_logger() {
    loggeru::install(&LOGGER).expect("no other logger should be installed");
    assert_eq!(log::max_level(), log::LevelFilter::Info);

    let line = line!() + 1;
    log::info!("hello from {}", "log");
    log::warn!("{{braces}} survive");
    log::debug!("filtered out");
    log::trace!("filtered out");
    log::error!("last");
    log::logger().flush();

    let lines = BUFFER.lines();
    assert_eq!(
        lines,
        vec![
            format!("[INFO] > facade.rs (line {line}) :: hello from log"),
            format!("[WARNING] > facade.rs (line {}) :: {{braces}} survive", line + 1),
            format!("[ERROR] > facade.rs (line {}) :: last", line + 4),
        ]
    );
}
