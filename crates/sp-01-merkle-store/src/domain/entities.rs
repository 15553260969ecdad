//! # Domain Entities for the Authenticated Store
//!
//! Write batches, scan order and adapter configuration.

use serde::{Deserialize, Serialize};
use shared_types::Hash;

/// Root reported for a store with zero entries.
///
/// Hosts treat an all-zero root as "nothing committed yet".
pub const EMPTY_STORE_ROOT: Hash = [0u8; 32];

/// Direction of a range scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    pub fn is_ascending(self) -> bool {
        matches!(self, Order::Ascending)
    }
}

/// A single write inside a `WriteBatch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOp {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

/// Ordered set of writes applied all-or-nothing.
///
/// Every op is validated before the first one is applied, so a rejected
/// batch leaves the store untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a write. Later writes to the same key win.
    pub fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> &mut Self {
        self.ops.push(WriteOp { key, value });
        self
    }

    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn into_ops(self) -> Vec<WriteOp> {
        self.ops
    }
}

/// Configuration for the store adapter.
///
/// Limits bound the size of any single entry so a hostile transaction
/// cannot grow one record without bound.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Maximum key length in bytes.
    pub max_key_len: usize,
    /// Maximum value length in bytes.
    pub max_value_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_key_len: 256,
            max_value_len: 64 * 1024,
        }
    }
}
