//! # Shared Crypto
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `signatures` | Ed25519 | Transaction signing and verification |
//! | `hashing` | Keccak256 | Address derivation, content hashing |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, no RNG dependency when signing. Two
//!   signatures by the same key over the same bytes are identical, which is
//!   required for replicas to agree on transaction bytes.
//! - **Address**: last 20 bytes of `keccak256(public_key)`, not reversible.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{address_from_public_key, keccak256};
pub use signatures::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
