//! Application configuration from environment variables.

use shared_types::BlockHeight;
use sp_01_merkle_store::StoreConfig;
use sp_02_signature_envelope::CodecConfig;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationConfig {
    /// Height used until the host signals the first block boundary.
    pub initial_height: BlockHeight,

    /// Key/value size limits of the in-memory store.
    pub store: StoreConfig,

    /// Transaction size limits.
    pub codec: CodecConfig,
}

impl ApplicationConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SP_INITIAL_HEIGHT`: starting block height (default: 0)
    /// - `SP_MAX_KEY_BYTES`: largest store key (default: 256)
    /// - `SP_MAX_VALUE_BYTES`: largest store value (default: 65536)
    /// - `SP_MAX_TX_BYTES`: largest accepted transaction (default: 65536)
    /// - `SP_MAX_PAYLOAD_BYTES`: largest action payload (default: 32768)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            initial_height: env_or("SP_INITIAL_HEIGHT", defaults.initial_height),
            store: StoreConfig {
                max_key_len: env_or("SP_MAX_KEY_BYTES", defaults.store.max_key_len),
                max_value_len: env_or("SP_MAX_VALUE_BYTES", defaults.store.max_value_len),
            },
            codec: CodecConfig {
                max_tx_bytes: env_or("SP_MAX_TX_BYTES", defaults.codec.max_tx_bytes),
                max_payload_bytes: env_or("SP_MAX_PAYLOAD_BYTES", defaults.codec.max_payload_bytes),
            },
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
