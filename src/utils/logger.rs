use std::env;
use std::sync::Once;
use tracing::{Level, debug};

static INIT: Once = Once::new();

/// Maps a `LOGLEVEL` value to a tracing level, defaulting to INFO
#[must_use]
pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs the global tracing subscriber
///
/// The level comes from the `LOGLEVEL` environment variable. Safe to call more
/// than once; only the first call has an effect.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_log_level(&env::var("LOGLEVEL").unwrap_or_default());

        let installed = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init()
            .is_ok();

        if installed {
            debug!("Log level set to: {}", level);
        }
    });
}
