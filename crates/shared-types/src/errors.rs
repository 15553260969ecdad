//! # Error Types
//!
//! Errors shared across crates.

use thiserror::Error;

/// Raised when a numeric code received from outside does not map to a
/// known `ResultCode`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown result code: {0}")]
pub struct UnknownResultCode(pub u32);
