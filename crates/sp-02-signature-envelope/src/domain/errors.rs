//! # Envelope Errors

use crate::domain::actions::ActionKind;
use shared_types::ResultCode;
use thiserror::Error;

/// Errors raised while encoding, signing or receiving a transaction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The bytes are not a well-formed envelope or action body.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The signature does not verify against the embedded signer.
    #[error("Invalid signature")]
    InvalidSignature,

    /// The payload discriminant is unknown or retired.
    #[error("Unknown action type: 0x{0:02x}")]
    UnknownActionType(u8),

    /// A local action could not be encoded (e.g. its kind is not registered).
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// A locally built payload or envelope exceeds the configured limit.
    #[error("Payload too large: {size} bytes (max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}

impl EnvelopeError {
    /// Result code reported to the consensus host.
    pub fn code(&self) -> ResultCode {
        match self {
            Self::MalformedInput(_) | Self::PayloadTooLarge { .. } => ResultCode::EncodingError,
            Self::InvalidSignature => ResultCode::InvalidSignature,
            Self::UnknownActionType(_) => ResultCode::InvalidInput,
            Self::EncodingFailed(_) => ResultCode::InternalError,
        }
    }
}

/// Errors raised while building an `ActionRegistry`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Discriminant 0x00 is reserved")]
    ReservedDiscriminant,

    #[error("Discriminant 0x{0:02x} is already assigned")]
    DiscriminantInUse(u8),

    #[error("Discriminant 0x{0:02x} was retired and cannot be reassigned")]
    DiscriminantRetired(u8),

    #[error("Discriminant 0x{0:02x} is not assigned")]
    UnknownDiscriminant(u8),

    #[error("{0} is already registered")]
    KindAlreadyRegistered(ActionKind),
}
