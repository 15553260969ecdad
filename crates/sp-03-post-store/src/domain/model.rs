//! # Stored Models
//!
//! A stored value is the model tag followed by the canonical encoding of
//! the model. Tags match the key tags, so a value can be checked against
//! the key it was found under.

use crate::domain::entities::{Account, Post};
use crate::domain::errors::PostStoreError;
use crate::domain::keys::{Key, ACCOUNT_TAG, POST_TAG};
use shared_types::wire::{self, DEFAULT_WIRE_LIMIT};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Model {
    Account(Account),
    Post(Post),
}

impl Model {
    pub fn tag(&self) -> u8 {
        match self {
            Self::Account(_) => ACCOUNT_TAG,
            Self::Post(_) => POST_TAG,
        }
    }

    pub fn type_name(&self) -> &'static str {
        type_name(self.tag())
    }

    pub fn key(&self) -> Key {
        match self {
            Self::Account(account) => account.key().into(),
            Self::Post(post) => post.key().into(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, PostStoreError> {
        let body = match self {
            Self::Account(account) => wire::encode(account, DEFAULT_WIRE_LIMIT),
            Self::Post(post) => wire::encode(post, DEFAULT_WIRE_LIMIT),
        }
        .map_err(|e| PostStoreError::CorruptRecord {
            key: self.key().encode().map(hex::encode).unwrap_or_default(),
            reason: e.to_string(),
        })?;

        let mut out = Vec::with_capacity(body.len() + 1);
        out.push(self.tag());
        out.extend_from_slice(&body);
        Ok(out)
    }

    /// Decode a stored value. `key` is only used for error reporting.
    pub fn from_bytes(key: &[u8], bytes: &[u8]) -> Result<Self, PostStoreError> {
        let corrupt = |reason: String| PostStoreError::CorruptRecord {
            key: hex::encode(key),
            reason,
        };

        let (&tag, body) = bytes
            .split_first()
            .ok_or_else(|| corrupt("empty value".into()))?;
        match tag {
            ACCOUNT_TAG => wire::decode(body, DEFAULT_WIRE_LIMIT)
                .map(Self::Account)
                .map_err(|e| corrupt(e.to_string())),
            POST_TAG => wire::decode(body, DEFAULT_WIRE_LIMIT)
                .map(Self::Post)
                .map_err(|e| corrupt(e.to_string())),
            other => Err(corrupt(format!("unknown model tag 0x{other:02x}"))),
        }
    }

    pub fn into_account(self) -> Result<Account, PostStoreError> {
        match self {
            Self::Account(account) => Ok(account),
            other => Err(PostStoreError::UnexpectedModel {
                expected: type_name(ACCOUNT_TAG),
                found: other.type_name(),
            }),
        }
    }

    pub fn into_post(self) -> Result<Post, PostStoreError> {
        match self {
            Self::Post(post) => Ok(post),
            other => Err(PostStoreError::UnexpectedModel {
                expected: type_name(POST_TAG),
                found: other.type_name(),
            }),
        }
    }
}

impl From<Account> for Model {
    fn from(account: Account) -> Self {
        Self::Account(account)
    }
}

impl From<Post> for Model {
    fn from(post: Post) -> Self {
        Self::Post(post)
    }
}

pub(crate) fn type_name(tag: u8) -> &'static str {
    match tag {
        ACCOUNT_TAG => "Account",
        POST_TAG => "Post",
        _ => "unknown",
    }
}
