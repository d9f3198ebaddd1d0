//! Bootstrap with export enabled, then emit one event at each severity.
//!
//! Expects an OTLP collector at `OTEL_EXPORTER_OTLP_ENDPOINT` (default
//! `http://localhost:4317`). Illustrative only.

use anyhow::Result;
use observe::ObserveConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let mut obs = observe::init(ObserveConfig {
        enable_otel: true,
        ..ObserveConfig::default()
    })?;

    tracing::info!("this is an informational message");
    tracing::warn!("this is a warning message");
    tracing::error!("this is an error message");

    obs.shutdown()?;
    Ok(())
}
