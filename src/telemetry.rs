//! Tracing setup for the scoring CLI.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("a tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Resolves the level filter: an explicit `RUST_LOG` wins, otherwise the
/// configured level applies to the whole crate.
fn level_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::Filter {
            value: config.log_level.clone(),
            source,
        })
    })
}

/// Installs the global subscriber. Output is compact and plain; scoring runs
/// are piped and diffed, so no ansi.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(level_filter(config)?)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn config(level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: level.to_string(),
        }
    }

    #[test]
    fn configured_level_builds_a_filter() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        env::remove_var("RUST_LOG");
        assert!(level_filter(&config("debug")).is_ok());
    }

    #[test]
    fn malformed_level_reports_the_offending_value() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        env::remove_var("RUST_LOG");
        let err = level_filter(&config("placement=ai=debug")).expect_err("must reject");
        assert!(matches!(
            err,
            TelemetryError::Filter { ref value, .. } if value == "placement=ai=debug"
        ));
    }

    #[test]
    fn rust_log_overrides_the_configured_level() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        env::set_var("RUST_LOG", "warn");
        // The configured value is malformed, but RUST_LOG wins before it is
        // ever parsed.
        assert!(level_filter(&config("placement=ai=debug")).is_ok());
        env::remove_var("RUST_LOG");
    }
}
