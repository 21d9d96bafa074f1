//! Server configuration and logging setup
//!
//! Everything comes from the environment:
//! - `METRA_LOG` (falls back to `RUST_LOG`): tracing filter, default `info`
//! - `METRA_SERVER_NAME`: name reported in `initialize`

use std::env;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_SERVER_NAME: &str = "metra";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub log_filter: String,
    pub server_name: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let log_filter = non_empty(lookup("METRA_LOG"))
            .or_else(|| non_empty(lookup("RUST_LOG")))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let server_name = non_empty(lookup("METRA_SERVER_NAME"))
            .unwrap_or_else(|| DEFAULT_SERVER_NAME.to_string());

        ServerConfig { log_filter, server_name }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Install the global subscriber. Logs go to stderr; stdout carries the protocol.
pub fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .init();
}
