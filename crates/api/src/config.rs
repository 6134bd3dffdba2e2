//! Process configuration from environment variables.
//!
//! - `BIND_ADDR`: listen address (default `0.0.0.0:8080`)
//! - `LOG_FORMAT`: `json` or `pretty` (default `json`)
//! - `SEED_DATA`: start with the demo records (default `true`)

use std::net::SocketAddr;

use anyhow::{anyhow, Context};

use itemdesk_observability::LogFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    pub seed_data: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_format: LogFormat::default(),
            seed_data: true,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (unset keys fall back to defaults).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(v) => v
                .parse::<SocketAddr>()
                .with_context(|| format!("BIND_ADDR must be host:port, got {v:?}"))?,
            None => defaults.bind_addr,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(v) => v.parse::<LogFormat>().map_err(|e| anyhow!("LOG_FORMAT: {e}"))?,
            None => defaults.log_format,
        };

        let seed_data = match lookup("SEED_DATA") {
            Some(v) => v
                .trim()
                .parse::<bool>()
                .with_context(|| format!("SEED_DATA must be true or false, got {v:?}"))?,
            None => defaults.seed_data,
        };

        Ok(Self {
            bind_addr,
            log_format,
            seed_data,
        })
    }
}
