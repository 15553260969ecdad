//! # Read-side Queries
//!
//! Name lookups scan every account; there is no secondary index.

use crate::domain::{Account, AccountKey, Model, Post, PostKey, PostStoreError};
use crate::mapper::{self, Query};
use shared_types::Address;
use sp_01_merkle_store::MerkleStore;

pub fn find_account<S: MerkleStore>(
    store: &S,
    id: Address,
) -> Result<Option<Account>, PostStoreError> {
    mapper::load(store, &AccountKey::new(id).into())?
        .map(Model::into_account)
        .transpose()
}

/// Look up by raw key bytes, as a host `query` would.
pub fn find_account_by_key<S: MerkleStore>(
    store: &S,
    key: &[u8],
) -> Result<Option<Account>, PostStoreError> {
    mapper::load_bytes(store, key)?
        .map(Model::into_account)
        .transpose()
}

pub fn list_accounts<S, F>(store: &S, filter: F) -> Result<Vec<Account>, PostStoreError>
where
    S: MerkleStore,
    F: Fn(&Account) -> bool,
{
    let query = Query::new(AccountKey::any())
        .filter(|model| matches!(model, Model::Account(account) if filter(account)));
    mapper::list(store, &query)?
        .into_iter()
        .map(Model::into_account)
        .collect()
}

pub fn all_accounts<S: MerkleStore>(store: &S) -> Result<Vec<Account>, PostStoreError> {
    list_accounts(store, |_| true)
}

/// Exact name match.
pub fn account_matches_name(name: &str) -> impl Fn(&Account) -> bool + '_ {
    move |account| account.name == name
}

/// Case-insensitive substring match.
pub fn account_contains_name(fragment: &str) -> impl Fn(&Account) -> bool {
    let needle = fragment.to_lowercase();
    move |account| account.name.to_lowercase().contains(&needle)
}

pub fn find_account_by_name<S: MerkleStore>(
    store: &S,
    name: &str,
) -> Result<Option<Account>, PostStoreError> {
    Ok(list_accounts(store, account_matches_name(name))?
        .into_iter()
        .next())
}

pub fn search_accounts_by_name<S: MerkleStore>(
    store: &S,
    fragment: &str,
) -> Result<Vec<Account>, PostStoreError> {
    list_accounts(store, account_contains_name(fragment))
}

/// All posts of one account, ascending by number.
pub fn posts_for_account<S: MerkleStore>(
    store: &S,
    account: Address,
) -> Result<Vec<Post>, PostStoreError> {
    mapper::list(store, &Query::new(PostKey::for_account(account)))?
        .into_iter()
        .map(Model::into_post)
        .collect()
}

pub fn find_post<S: MerkleStore>(
    store: &S,
    account: Address,
    number: u32,
) -> Result<Option<Post>, PostStoreError> {
    mapper::load(store, &PostKey::new(account, number).into())?
        .map(Model::into_post)
        .transpose()
}

pub fn find_post_by_key<S: MerkleStore>(
    store: &S,
    key: &[u8],
) -> Result<Option<Post>, PostStoreError> {
    mapper::load_bytes(store, key)?
        .map(Model::into_post)
        .transpose()
}

/// Highest-numbered post of an account.
pub fn latest_post<S: MerkleStore>(
    store: &S,
    account: Address,
) -> Result<Option<Post>, PostStoreError> {
    // TODO: stop the descending scan after the first record once MerkleStore grows a lazy iterator
    let query = Query::new(PostKey::for_account(account)).descending();
    mapper::list(store, &query)?
        .into_iter()
        .next()
        .map(Model::into_post)
        .transpose()
}
