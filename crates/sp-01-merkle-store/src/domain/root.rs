use super::EMPTY_STORE_ROOT;
use sha3::{Digest, Keccak256};
use shared_types::Hash;

/// Content hash over a key-ordered sequence of entries.
///
/// Each entry contributes `len(key) || key || len(value) || value` with
/// 4-byte big-endian lengths, so no two distinct entry sets share a
/// preimage. Callers must pass entries in ascending key order.
pub fn content_root<'a, I>(entries: I) -> Hash
where
    I: IntoIterator<Item = (&'a [u8], &'a [u8])>,
{
    let mut hasher = Keccak256::new();
    let mut count = 0usize;

    for (key, value) in entries {
        hasher.update((key.len() as u32).to_be_bytes());
        hasher.update(key);
        hasher.update((value.len() as u32).to_be_bytes());
        hasher.update(value);
        count += 1;
    }

    if count == 0 {
        return EMPTY_STORE_ROOT;
    }

    hasher.finalize().into()
}
