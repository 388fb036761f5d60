//! qbiz Read Handler
//!
//! Reads a handler request JSON document from stdin, reads the addressed
//! Application from the remote service and writes the resulting progress
//! event JSON to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use qbiz_read_handler::{config::Config, invoke, logging, HttpApplicationApi};
use qbiz_reconcile::ReadHandler;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    logging::init(&config.log_level)?;

    info!(
        endpoint_url = %config.endpoint_url,
        request_timeout_secs = config.request_timeout.as_secs(),
        "Configuration loaded"
    );

    let api = HttpApplicationApi::new(&config)?;
    let handler = ReadHandler::new(api);

    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("Failed to read request from stdin")?;

    let event = invoke(&handler, &input).await;
    info!(status = %event.status, "Read handler finished");

    let mut output = serde_json::to_vec(&event).context("Failed to serialize progress event")?;
    output.push(b'\n');

    let mut stdout = tokio::io::stdout();
    stdout.write_all(&output).await?;
    stdout.flush().await?;

    Ok(())
}
