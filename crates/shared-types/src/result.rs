//! # Transaction Results
//!
//! The `{code, data, log}` triple returned to the consensus host for every
//! `check_tx`, `append_tx` and `query` call.
//!
//! Codes follow the TMSP numbering so existing hosts can interpret them:
//! generic codes below 100, application ("base") codes from 101.

use crate::errors::UnknownResultCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable numeric result code.
///
/// Values are part of the wire contract with the host. Never renumber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ResultCode {
    Ok = 0,
    InternalError = 1,
    EncodingError = 2,
    Unauthorized = 4,
    UnknownRequest = 6,
    DuplicateAddress = 101,
    InvalidInput = 106,
    InvalidSignature = 110,
    UnknownAddress = 111,
}

impl ResultCode {
    /// Numeric value as sent to the host.
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn is_ok(self) -> bool {
        self == ResultCode::Ok
    }
}

impl TryFrom<u32> for ResultCode {
    type Error = UnknownResultCode;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ResultCode::Ok),
            1 => Ok(ResultCode::InternalError),
            2 => Ok(ResultCode::EncodingError),
            4 => Ok(ResultCode::Unauthorized),
            6 => Ok(ResultCode::UnknownRequest),
            101 => Ok(ResultCode::DuplicateAddress),
            106 => Ok(ResultCode::InvalidInput),
            110 => Ok(ResultCode::InvalidSignature),
            111 => Ok(ResultCode::UnknownAddress),
            other => Err(UnknownResultCode(other)),
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.as_u32())
    }
}

/// Result of applying, checking or querying a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxResult {
    /// Outcome code.
    pub code: ResultCode,
    /// Response payload (e.g. the key of a created record, a queried value).
    pub data: Vec<u8>,
    /// Human-readable message, empty on success.
    pub log: String,
}

impl TxResult {
    /// Successful result carrying `data`.
    pub fn ok(data: Vec<u8>) -> Self {
        Self {
            code: ResultCode::Ok,
            data,
            log: String::new(),
        }
    }

    /// Failed result with no payload.
    pub fn error(code: ResultCode, log: impl Into<String>) -> Self {
        Self {
            code,
            data: Vec::new(),
            log: log.into(),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code.is_ok()
    }

    #[must_use]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }
}
