//! # Commands
//!
//! State-changing operations. Every check runs before the first write, and
//! each command commits through a single `MerkleStore` call, so a rejected
//! command leaves the store untouched.

use crate::domain::{Account, AccountKey, Model, Post, PostStoreError};
use crate::mapper::{self, stage};
use crate::queries::{find_account, find_account_by_name};
use shared_types::{Address, BlockHeight};
use sp_01_merkle_store::{MerkleStore, WriteBatch};
use tracing::debug;

/// Register `name` under the signer's address. Returns the account key.
pub fn create_account<S: MerkleStore>(
    store: &mut S,
    name: &str,
    signer: Option<Address>,
) -> Result<Vec<u8>, PostStoreError> {
    let id = signer.ok_or(PostStoreError::Unauthorized)?;
    let key = AccountKey::new(id);

    if mapper::load(store, &key.into())?.is_some() {
        return Err(PostStoreError::DuplicateAddress(id));
    }
    if find_account_by_name(store, name)?.is_some() {
        return Err(PostStoreError::DuplicateName(name.to_string()));
    }

    mapper::save(store, &Model::from(Account::new(id, name)))?;
    debug!(account = %hex::encode(id), name, "Account created");
    key.encode()
}

/// Append the next post for the signer's account. Returns the post key.
///
/// The post and the incremented account are written as one batch.
pub fn append_post<S: MerkleStore>(
    store: &mut S,
    title: &str,
    content: &str,
    signer: Option<Address>,
    height: BlockHeight,
) -> Result<Vec<u8>, PostStoreError> {
    let id = signer.ok_or(PostStoreError::Unauthorized)?;
    let mut account = find_account(store, id)?.ok_or(PostStoreError::UnknownAddress(id))?;
    let number = account
        .entry_count
        .checked_add(1)
        .ok_or(PostStoreError::SequenceExhausted(id))?;

    let post = Post {
        account: id,
        number,
        published_block: height,
        title: title.to_string(),
        content: content.to_string(),
    };
    let key = post.key().encode()?;
    account.entry_count = number;

    let mut batch = WriteBatch::new();
    stage(&mut batch, &Model::from(post))?;
    stage(&mut batch, &Model::from(account))?;
    store.apply(batch)?;

    debug!(account = %hex::encode(id), number, height, "Post appended");
    Ok(key)
}
