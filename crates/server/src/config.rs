//! Environment-driven server configuration.
//!
//! Every knob has a default suitable for local demos, so a bare
//! `mockbase` invocation just works; the env vars exist for container
//! deployments.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// Runtime configuration for the HTTP server.
pub struct Config {
    /// Interface to bind, `MOCKBASE_ADDR` (default `0.0.0.0`).
    pub addr: String,
    /// Port to bind, `MOCKBASE_PORT` (default `8080`).
    pub port: u16,
}

impl Config {
    /// Load from the environment, falling back to defaults with a log line.
    pub fn load() -> Self {
        Self {
            addr: try_load("MOCKBASE_ADDR", "0.0.0.0"),
            port: try_load("MOCKBASE_PORT", "8080"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load()
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
