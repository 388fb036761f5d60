//! Logging initialization for the read handler.
//!
//! Stdout carries the progress event, so all logs go to stderr as JSON.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize JSON logging on stderr.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
        .try_init()?;

    Ok(())
}
