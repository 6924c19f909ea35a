use std::env;
use std::str::FromStr;
use tracing::Level;

pub const LOG_LEVEL_VAR: &str = "CONVENE_LOG";

// log_level reads CONVENE_LOG (e.g. "debug"), falling back to INFO when unset or unparsable.
pub fn log_level(value: Option<String>) -> Level {
    value.and_then(|v| Level::from_str(v.trim()).ok()).unwrap_or(Level::INFO)
}

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(log_level(env::var(LOG_LEVEL_VAR).ok()))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .json()
        .init();
}
