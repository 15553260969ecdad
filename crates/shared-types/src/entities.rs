//! # Core Domain Entities
//!
//! Byte-width aliases and the small value types exchanged with the
//! consensus host.

use serde::{Deserialize, Serialize};

/// A 32-byte content hash (store root, digests).
pub type Hash = [u8; 32];

/// A 20-byte account address derived from a public key.
pub type Address = [u8; 20];

/// A 32-byte Ed25519 public key.
pub type PublicKey = [u8; 32];

/// A 64-byte Ed25519 signature.
pub type Signature = [u8; 64];

/// Height of a block as furnished by the consensus host.
pub type BlockHeight = u64;

/// Length in bytes of an `Address`.
pub const ADDRESS_LENGTH: usize = 20;

/// A validator entry as passed through `init_chain` / `end_block`.
///
/// The application core never computes validator changes; the type exists so
/// the lifecycle surface matches what the host exchanges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    /// Validator public key.
    pub pub_key: PublicKey,
    /// Voting power.
    pub power: u64,
}
