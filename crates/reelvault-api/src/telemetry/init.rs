use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_LOG_FILTER: &str = "reelvault=debug,tower_http=debug";

/// Install the global tracing subscriber.
///
/// Console output uses the compact format; `RUST_LOG` overrides the default
/// filter. Fails if a global subscriber is already set.
pub fn init_telemetry(environment: &str) -> Result<(), anyhow::Error> {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(console_fmt)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))?;

    tracing::info!(environment = %environment, "Tracing initialized");
    Ok(())
}
