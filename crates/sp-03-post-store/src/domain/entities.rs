//! # Domain Entities

use crate::domain::keys::{AccountKey, PostKey};
use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockHeight};

/// A named account that can publish posts.
///
/// `id` is the signer's address. `entry_count` always equals the number of
/// posts stored for the account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Address,
    pub name: String,
    pub entry_count: u32,
}

impl Account {
    pub fn new(id: Address, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            entry_count: 0,
        }
    }

    pub fn key(&self) -> AccountKey {
        AccountKey::new(self.id)
    }
}

/// One immutable post. Numbers start at 1 and are contiguous per account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub account: Address,
    pub number: u32,
    pub published_block: BlockHeight,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn key(&self) -> PostKey {
        PostKey::new(self.account, self.number)
    }
}
