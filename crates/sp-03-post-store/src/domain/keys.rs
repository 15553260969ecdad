//! # Compound Keys
//!
//! Each entity key encodes to an order-preserving byte string: a one-byte
//! entity tag followed by fixed-width fields, integers big-endian. A key
//! with unset trailing fields stands for every record sharing its prefix;
//! `range_bounds` turns it into an inclusive `(min, max)` scan window.
//!
//! Once a field is unset, every field after it spans its full range.

use crate::domain::errors::PostStoreError;
use shared_types::{Address, ADDRESS_LENGTH};

pub const ACCOUNT_TAG: u8 = 0x01;
pub const POST_TAG: u8 = 0x02;

pub const ACCOUNT_KEY_LEN: usize = 1 + ADDRESS_LENGTH;
pub const POST_KEY_LEN: usize = 1 + ADDRESS_LENGTH + 4;

const MIN_ADDRESS: Address = [0x00; ADDRESS_LENGTH];
const MAX_ADDRESS: Address = [0xff; ADDRESS_LENGTH];

/// First post number. Zero is the "unset" sentinel and is never stored.
pub const FIRST_POST_NUMBER: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccountKey {
    pub id: Option<Address>,
}

impl AccountKey {
    pub fn new(id: Address) -> Self {
        Self { id: Some(id) }
    }

    /// Wildcard over every account.
    pub fn any() -> Self {
        Self { id: None }
    }

    pub fn is_complete(&self) -> bool {
        self.id.is_some()
    }

    pub fn encode(&self) -> Result<Vec<u8>, PostStoreError> {
        let id = self.id.ok_or(PostStoreError::IncompleteKey)?;
        Ok(account_bytes(&id))
    }

    pub fn range_bounds(&self) -> (Vec<u8>, Vec<u8>) {
        match self.id {
            Some(id) => (account_bytes(&id), account_bytes(&id)),
            None => (account_bytes(&MIN_ADDRESS), account_bytes(&MAX_ADDRESS)),
        }
    }

    pub fn decode(bytes: &[u8]) -> Option<Self> {
        match bytes.split_first() {
            Some((&ACCOUNT_TAG, rest)) if rest.len() == ADDRESS_LENGTH => {
                let id: Address = rest.try_into().ok()?;
                Some(Self::new(id))
            }
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PostKey {
    pub account: Option<Address>,
    /// `0` means unset.
    pub number: u32,
}

impl PostKey {
    pub fn new(account: Address, number: u32) -> Self {
        Self {
            account: Some(account),
            number,
        }
    }

    /// Every post of one account.
    pub fn for_account(account: Address) -> Self {
        Self::new(account, 0)
    }

    /// Every post of every account.
    pub fn any() -> Self {
        Self {
            account: None,
            number: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.account.is_some() && self.number >= FIRST_POST_NUMBER
    }

    pub fn encode(&self) -> Result<Vec<u8>, PostStoreError> {
        match self.account {
            Some(account) if self.number >= FIRST_POST_NUMBER => {
                Ok(post_bytes(&account, self.number))
            }
            _ => Err(PostStoreError::IncompleteKey),
        }
    }

    pub fn range_bounds(&self) -> (Vec<u8>, Vec<u8>) {
        match (self.account, self.number) {
            (Some(account), 0) => (
                post_bytes(&account, FIRST_POST_NUMBER),
                post_bytes(&account, u32::MAX),
            ),
            (Some(account), number) => (post_bytes(&account, number), post_bytes(&account, number)),
            (None, _) => (
                post_bytes(&MIN_ADDRESS, FIRST_POST_NUMBER),
                post_bytes(&MAX_ADDRESS, u32::MAX),
            ),
        }
    }

    pub fn decode(bytes: &[u8]) -> Option<Self> {
        match bytes.split_first() {
            Some((&POST_TAG, rest)) if rest.len() == ADDRESS_LENGTH + 4 => {
                let (account, number) = rest.split_at(ADDRESS_LENGTH);
                let account: Address = account.try_into().ok()?;
                let number = u32::from_be_bytes(number.try_into().ok()?);
                Some(Self::new(account, number))
            }
            _ => None,
        }
    }
}

/// Any entity key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Account(AccountKey),
    Post(PostKey),
}

impl Key {
    pub fn tag(&self) -> u8 {
        match self {
            Self::Account(_) => ACCOUNT_TAG,
            Self::Post(_) => POST_TAG,
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            Self::Account(k) => k.is_complete(),
            Self::Post(k) => k.is_complete(),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, PostStoreError> {
        match self {
            Self::Account(k) => k.encode(),
            Self::Post(k) => k.encode(),
        }
    }

    pub fn range_bounds(&self) -> (Vec<u8>, Vec<u8>) {
        match self {
            Self::Account(k) => k.range_bounds(),
            Self::Post(k) => k.range_bounds(),
        }
    }

    pub fn decode(bytes: &[u8]) -> Option<Self> {
        match bytes.first() {
            Some(&ACCOUNT_TAG) => AccountKey::decode(bytes).map(Self::Account),
            Some(&POST_TAG) => PostKey::decode(bytes).map(Self::Post),
            _ => None,
        }
    }
}

impl From<AccountKey> for Key {
    fn from(key: AccountKey) -> Self {
        Self::Account(key)
    }
}

impl From<PostKey> for Key {
    fn from(key: PostKey) -> Self {
        Self::Post(key)
    }
}

fn account_bytes(id: &Address) -> Vec<u8> {
    let mut out = Vec::with_capacity(ACCOUNT_KEY_LEN);
    out.push(ACCOUNT_TAG);
    out.extend_from_slice(id);
    out
}

fn post_bytes(account: &Address, number: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(POST_KEY_LEN);
    out.push(POST_TAG);
    out.extend_from_slice(account);
    out.extend_from_slice(&number.to_be_bytes());
    out
}
