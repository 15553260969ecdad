use shared_types::{Address, ResultCode};
use sp_01_merkle_store::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostStoreError {
    #[error("Transaction has no valid signer")]
    Unauthorized,

    #[error("Account already exists for address {}", hex::encode(.0))]
    DuplicateAddress(Address),

    #[error("Account name already taken: {0}")]
    DuplicateName(String),

    #[error("No account for address {}", hex::encode(.0))]
    UnknownAddress(Address),

    #[error("Key has unset fields and cannot address a single record")]
    IncompleteKey,

    #[error("Corrupt record at {key}: {reason}")]
    CorruptRecord { key: String, reason: String },

    #[error("Expected {expected} record, found {found}")]
    UnexpectedModel {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Post numbers exhausted for address {}", hex::encode(.0))]
    SequenceExhausted(Address),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl PostStoreError {
    /// Result code reported to the consensus host.
    ///
    /// A taken name reports `DuplicateAddress`, the same code the host has
    /// always seen for it.
    pub fn code(&self) -> ResultCode {
        match self {
            Self::Unauthorized => ResultCode::Unauthorized,
            Self::DuplicateAddress(_) | Self::DuplicateName(_) => ResultCode::DuplicateAddress,
            Self::UnknownAddress(_) => ResultCode::UnknownAddress,
            Self::SequenceExhausted(_) => ResultCode::InvalidInput,
            Self::IncompleteKey
            | Self::CorruptRecord { .. }
            | Self::UnexpectedModel { .. }
            | Self::Store(_) => ResultCode::InternalError,
        }
    }
}
