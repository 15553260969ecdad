//! # SignedPost Telemetry
//!
//! Structured logging setup for binaries. Library crates only emit
//! `tracing` events; this crate installs the subscriber that renders them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sp_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     // ...
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SP_SERVICE_NAME` | `signedpost` | Service name attached to the startup event |
//! | `SP_LOG_LEVEL` / `RUST_LOG` | `info` | `EnvFilter` directive |
//! | `SP_CONSOLE_OUTPUT` | `true` | Write events to stderr |
//! | `SP_JSON_LOGS` | `false` | One JSON object per event |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{build_filter, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter directive: {0}")]
    Filter(String),

    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Install the global subscriber described by `config`.
///
/// Fails instead of panicking if a subscriber is already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    init_tracing(config)
}
