use crate::domain::{content_root, Order, StoreConfig, StoreError, WriteBatch};
use crate::ports::{Entry, MerkleStore};
use shared_types::Hash;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

/// In-memory implementation of `MerkleStore` with copy-on-write snapshots.
///
/// `copy()` shares the underlying map. The first write to a shared map
/// clones it, so a block pays at most one O(n) detach per snapshot.
#[derive(Clone, Debug, Default)]
pub struct MemoryMerkleStore {
    entries: Arc<BTreeMap<Vec<u8>, Vec<u8>>>,
    config: StoreConfig,
}

impl MemoryMerkleStore {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            entries: Arc::new(BTreeMap::new()),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// True while this snapshot still shares its map with another copy.
    pub fn is_shared(&self) -> bool {
        Arc::strong_count(&self.entries) > 1
    }

    fn validate(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        if key.len() > self.config.max_key_len {
            return Err(StoreError::KeyTooLong {
                len: key.len(),
                max: self.config.max_key_len,
            });
        }
        if value.len() > self.config.max_value_len {
            return Err(StoreError::ValueTooLong {
                len: value.len(),
                max: self.config.max_value_len,
            });
        }
        Ok(())
    }

    fn entries_mut(&mut self) -> &mut BTreeMap<Vec<u8>, Vec<u8>> {
        if self.is_shared() {
            tracing::trace!(entries = self.entries.len(), "Detaching shared store snapshot");
        }
        Arc::make_mut(&mut self.entries)
    }
}

impl MerkleStore for MemoryMerkleStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<bool, StoreError> {
        self.validate(&key, &value)?;
        Ok(self.entries_mut().insert(key, value).is_some())
    }

    fn apply(&mut self, batch: WriteBatch) -> Result<(), StoreError> {
        for op in batch.ops() {
            self.validate(&op.key, &op.value)?;
        }
        if batch.is_empty() {
            return Ok(());
        }

        let entries = self.entries_mut();
        for op in batch.into_ops() {
            entries.insert(op.key, op.value);
        }
        Ok(())
    }

    fn range(&self, start: &[u8], end: &[u8], order: Order) -> Result<Vec<Entry>, StoreError> {
        if start > end {
            return Ok(Vec::new());
        }

        let iter = self
            .entries
            .range::<[u8], _>((Bound::Included(start), Bound::Included(end)))
            .map(|(k, v)| (k.clone(), v.clone()));

        Ok(match order {
            Order::Ascending => iter.collect(),
            Order::Descending => iter.rev().collect(),
        })
    }

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn root_hash(&self) -> Hash {
        content_root(
            self.entries
                .iter()
                .map(|(k, v)| (k.as_slice(), v.as_slice())),
        )
    }

    fn copy(&self) -> Self {
        self.clone()
    }
}
