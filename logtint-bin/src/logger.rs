use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;

/// Environment variable holding the log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub const LOG_LEVEL_ENV: &str = "LOGTINT_LOG";

/// Install a stderr logger when `LOGTINT_LOG` asks for one.
///
/// Logging is off by default so stderr only carries the user-facing diagnostics.
pub fn init() {
    let level = level_from(env::var(LOG_LEVEL_ENV).ok().as_deref());
    if level == LevelFilter::Off {
        return;
    }

    // stdout stays reserved for colorized output
    if TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto).is_ok() {
        log::debug!("Logging enabled at level {}", level);
    }
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Off)
}
