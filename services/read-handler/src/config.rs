//! Configuration for the read handler.

use std::time::Duration;

use anyhow::{Context, Result};

/// Read handler configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the application API (the service, or a signing proxy in
    /// front of it).
    pub endpoint_url: String,

    /// Deadline for each remote call.
    pub request_timeout: Duration,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: "http://127.0.0.1:4566".to_string(),
            request_timeout: Duration::from_secs(30),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let endpoint_url = var("QBIZ_ENDPOINT_URL").unwrap_or(defaults.endpoint_url);

        let request_timeout = match var("QBIZ_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid QBIZ_REQUEST_TIMEOUT_SECS: {raw:?}"))?;
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        let log_level = var("QBIZ_LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Self {
            endpoint_url,
            request_timeout,
            log_level,
        })
    }
}
