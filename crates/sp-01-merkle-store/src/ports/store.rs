use crate::domain::{Order, StoreError, WriteBatch};
use shared_types::Hash;

/// A key-value entry returned by range scans.
pub type Entry = (Vec<u8>, Vec<u8>);

/// Authenticated, ordered byte-key to byte-value map.
///
/// This is the only surface the application core needs from the tree
/// primitive. Implementations must be deterministic: two stores that saw
/// the same sequence of writes report the same `root_hash`.
pub trait MerkleStore: Send + Sync {
    /// Point lookup.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Insert or overwrite one entry. Returns `true` when a value existed.
    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<bool, StoreError>;

    /// Apply every write in `batch` or none of them.
    fn apply(&mut self, batch: WriteBatch) -> Result<(), StoreError>;

    /// All entries with `start <= key <= end`, materialized in `order`.
    ///
    /// An inverted range (`start > end`) yields no entries.
    fn range(&self, start: &[u8], end: &[u8], order: Order) -> Result<Vec<Entry>, StoreError>;

    /// Number of entries.
    fn size(&self) -> usize;

    /// Content hash of every entry; `EMPTY_STORE_ROOT` when `size() == 0`.
    fn root_hash(&self) -> Hash;

    /// Independent snapshot. Writes to either side are invisible to the
    /// other. Must be cheap: it runs on every commit.
    fn copy(&self) -> Self
    where
        Self: Sized;
}
