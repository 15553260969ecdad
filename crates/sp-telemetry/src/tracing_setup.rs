//! Subscriber setup: `EnvFilter` plus an optional pretty or JSON fmt layer.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Parse the configured filter directive.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Filter(e.to_string()))
}

/// Install the global tracing subscriber.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    // JSON output for log shippers
    let json_layer = (config.console_output && config.json_logs).then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
    });

    // Pretty output for development
    let pretty_layer = (config.console_output && !config.json_logs).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_ansi(true)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        filter = %config.log_level,
        json = config.json_logs,
        "Tracing initialized"
    );
    Ok(())
}
