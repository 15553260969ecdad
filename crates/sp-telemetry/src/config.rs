//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name for the startup event
    pub service_name: String,

    /// `EnvFilter` directive (e.g. `info`, `sp_05_application=debug`)
    pub log_level: String,

    /// Whether to write events to stderr at all
    pub console_output: bool,

    /// Whether to render events as JSON
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "signedpost".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SP_SERVICE_NAME`: Service name (default: signedpost)
    /// - `SP_LOG_LEVEL` or `RUST_LOG`: Filter directive (default: info)
    /// - `SP_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `SP_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("SP_SERVICE_NAME").unwrap_or_else(|_| "signedpost".to_string()),

            log_level: env::var("SP_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("SP_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: env::var("SP_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Same configuration with a different filter directive.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}
