use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "weather_alert=info,weather_alert_core=info,rmcp=warn";
const VERBOSE_FILTER: &str = "weather_alert=debug,weather_alert_core=debug,rmcp=info";

/// Initialize logging to stderr.
///
/// stdout stays clean because the stdio transport speaks MCP on it.
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) -> Result<()> {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}
