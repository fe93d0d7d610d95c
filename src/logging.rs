#![cfg(feature = "std")]

//! Stderr logger for the game binaries. Stdout belongs to the console, so
//! records never go there.

use std::env;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

/// Name of the environment variable holding the log level.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

/// Level used when nothing else is configured.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct GameLogger;

impl log::Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with("broadside")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let module = record
            .target()
            .strip_prefix("broadside::")
            .unwrap_or("main");
        let _ = writeln!(
            std::io::stderr().lock(),
            "{:<5} {}: {}",
            record.level(),
            module,
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: GameLogger = GameLogger;

/// Level named by `value`, falling back to `warn` when it is missing or
/// not a level name.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the logger at `level`. Later calls only change the level.
pub fn init_logging_at(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Install the logger with the level taken from `BROADSIDE_LOG`.
pub fn init_logging() {
    init_logging_at(parse_level(env::var(LOG_ENV).ok().as_deref()));
}
