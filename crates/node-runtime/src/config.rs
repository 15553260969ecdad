//! # Node Configuration

use sp_05_application::ApplicationConfig;
use sp_telemetry::TelemetryConfig;
use std::env;
use std::path::PathBuf;

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// Application limits and starting height.
    pub application: ApplicationConfig,
    /// Log output.
    pub telemetry: TelemetryConfig,
    /// Transaction log to replay.
    pub tx_log: Option<PathBuf>,
}

impl NodeConfig {
    /// Load every section from the environment. `SP_TX_LOG` names the
    /// transaction log.
    pub fn from_env() -> Self {
        Self {
            application: ApplicationConfig::from_env(),
            telemetry: TelemetryConfig::from_env(),
            tx_log: env::var_os("SP_TX_LOG").map(PathBuf::from),
        }
    }

    pub fn with_tx_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.tx_log = Some(path.into());
        self
    }
}
