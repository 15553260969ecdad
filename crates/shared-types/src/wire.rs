//! # Canonical Binary Encoding
//!
//! Every byte that reaches the store or a signature goes through these
//! helpers. The options are fixed: little-endian fixed-width integers,
//! u64 length prefixes, trailing bytes rejected. Encoding the same value
//! always yields the same bytes and only those bytes decode back to it.

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Default ceiling for a single encoded value.
pub const DEFAULT_WIRE_LIMIT: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("Encoding failed: {0}")]
    Encode(String),

    #[error("Decoding failed: {0}")]
    Decode(String),
}

fn options(limit: u64) -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
        .with_limit(limit)
}

/// Canonically encode `value`, failing if it would exceed `limit` bytes.
pub fn encode<T: Serialize>(value: &T, limit: u64) -> Result<Vec<u8>, WireError> {
    options(limit)
        .serialize(value)
        .map_err(|e| WireError::Encode(e.to_string()))
}

/// Decode exactly one value from `bytes`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8], limit: u64) -> Result<T, WireError> {
    options(limit)
        .deserialize(bytes)
        .map_err(|e| WireError::Decode(e.to_string()))
}
