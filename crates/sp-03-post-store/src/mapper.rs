//! # Object Mapper
//!
//! Save, load and range-list `Model`s in any `MerkleStore`.
//!
//! Records that fail to decode abort the operation. Skipping them would let
//! replicas with different error tolerance diverge.

use crate::domain::model::type_name;
use crate::domain::{Key, Model, PostStoreError};
use sp_01_merkle_store::{MerkleStore, Order, WriteBatch};
use tracing::warn;

/// Predicate applied to decoded records during a scan.
pub type Filter<'a> = Box<dyn Fn(&Model) -> bool + 'a>;

/// A range scan: every record under `key` (complete or partial), in
/// `order`, optionally filtered.
pub struct Query<'a> {
    pub key: Key,
    pub order: Order,
    pub filter: Option<Filter<'a>>,
}

impl<'a> Query<'a> {
    pub fn new(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            order: Order::Ascending,
            filter: None,
        }
    }

    pub fn descending(mut self) -> Self {
        self.order = Order::Descending;
        self
    }

    pub fn filter(mut self, filter: impl Fn(&Model) -> bool + 'a) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    fn accepts(&self, model: &Model) -> bool {
        self.filter.as_ref().map_or(true, |f| f(model))
    }
}

/// Write `model` under its own key. Returns true if a record was replaced.
pub fn save<S: MerkleStore>(store: &mut S, model: &Model) -> Result<bool, PostStoreError> {
    let key = model.key().encode()?;
    let value = model.to_bytes()?;
    Ok(store.set(key, value)?)
}

/// Queue `model` into `batch` instead of writing it immediately.
pub fn stage(batch: &mut WriteBatch, model: &Model) -> Result<(), PostStoreError> {
    let key = model.key().encode()?;
    batch.set(key, model.to_bytes()?);
    Ok(())
}

/// Fetch the record stored under a complete key.
pub fn load<S: MerkleStore>(store: &S, key: &Key) -> Result<Option<Model>, PostStoreError> {
    let bytes = key.encode()?;
    let model = load_bytes(store, &bytes)?;
    match model {
        Some(model) if model.tag() != key.tag() => Err(PostStoreError::UnexpectedModel {
            expected: type_name(key.tag()),
            found: model.type_name(),
        }),
        other => Ok(other),
    }
}

/// Fetch and decode whatever is stored at raw `key` bytes.
pub fn load_bytes<S: MerkleStore>(store: &S, key: &[u8]) -> Result<Option<Model>, PostStoreError> {
    match store.get(key)? {
        Some(value) => decode(key, &value).map(Some),
        None => Ok(None),
    }
}

/// Materialise every record matched by `query`.
pub fn list<S: MerkleStore>(store: &S, query: &Query<'_>) -> Result<Vec<Model>, PostStoreError> {
    let (start, end) = query.key.range_bounds();
    let mut out = Vec::new();
    for (key, value) in store.range(&start, &end, query.order)? {
        let model = decode(&key, &value)?;
        if model.tag() != query.key.tag() {
            return Err(PostStoreError::UnexpectedModel {
                expected: type_name(query.key.tag()),
                found: model.type_name(),
            });
        }
        if query.accepts(&model) {
            out.push(model);
        }
    }
    Ok(out)
}

fn decode(key: &[u8], value: &[u8]) -> Result<Model, PostStoreError> {
    Model::from_bytes(key, value).map_err(|e| {
        warn!(key = %hex::encode(key), error = %e, "Undecodable record in store");
        e
    })
}
