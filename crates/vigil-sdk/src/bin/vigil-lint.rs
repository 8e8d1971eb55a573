//! Validates every condition of a Vigil configuration file.
//!
//! Usage: `vigil-lint [path]` (defaults to `$VIGIL_CONFIG_PATH`, then
//! `config/config.yaml`). Exits non-zero on the first invalid endpoint.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vigil_sdk::EndpointsConfig;

fn main() -> Result<()> {
    init_tracing()?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(EndpointsConfig::default_path);

    let config = EndpointsConfig::from_file(&path)
        .with_context(|| format!("Failed to load configuration from {}", path))?;

    for endpoint in &config.endpoints {
        info!(
            endpoint = %endpoint.display_name(),
            conditions = endpoint.conditions.len(),
            "✓ Endpoint is valid"
        );
    }
    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigil_sdk=info,vigil_core=info,vigil_lint=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
