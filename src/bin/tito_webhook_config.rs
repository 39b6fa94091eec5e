use tito_webhook_config::{report::PresenceReport, WebhookConfig};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    // Read configuration.
    let cfg = WebhookConfig::from_env().context("read webhook settings from environment")?;
    let report = PresenceReport::new(&cfg);
    for key in &report.missing {
        tracing::warn!(key, "webhook setting not configured");
    }
    tracing::info!(present = report.present.len(), missing = report.missing.len(), "webhook settings resolved");
    // Print report.
    println!("{}", serde_json::to_string_pretty(&report).context("serialize report")?);
    Ok(())
}
