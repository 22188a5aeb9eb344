// src/logging.rs

//! Logging setup for `prereqs` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `PREREQS_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `info`
//!
//! Logs are sent to STDERR so that stdout carries only the resolved order.

use anyhow::{Result, anyhow};
use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV_VAR: &str = "PREREQS_LOG";

/// Install the global `fmt` subscriber. Call once, early in `main`.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_level = std::env::var(LOG_ENV_VAR).ok();
    let level = effective_level(cli_level, env_level.as_deref());

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

/// CLI flag, then the env value (unrecognised values are ignored), then INFO.
fn effective_level(cli_level: Option<LogLevel>, env_level: Option<&str>) -> Level {
    cli_level
        .or_else(|| env_level.and_then(LogLevel::parse_lenient))
        .map(Level::from)
        .unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_environment() {
        assert_eq!(
            effective_level(Some(LogLevel::Debug), Some("error")),
            Level::DEBUG
        );
    }

    #[test]
    fn environment_is_trimmed_and_case_insensitive() {
        assert_eq!(effective_level(None, Some(" Warning ")), Level::WARN);
        assert_eq!(effective_level(None, Some("TRACE")), Level::TRACE);
    }

    #[test]
    fn unknown_or_missing_environment_falls_back_to_info() {
        assert_eq!(effective_level(None, Some("loud")), Level::INFO);
        assert_eq!(effective_level(None, None), Level::INFO);
    }
}
