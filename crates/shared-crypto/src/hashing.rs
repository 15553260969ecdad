//! # Keccak256 Hashing
//!
//! Content hashing and address derivation.

use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash, PublicKey};

/// Compute Keccak256 hash.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Derive an account address from a public key.
///
/// The address is the last 20 bytes of `keccak256(public_key)`.
pub fn address_from_public_key(public_key: &PublicKey) -> Address {
    let hash = keccak256(public_key);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}
