//! # Ed25519 Signatures
//!
//! Twisted Edwards curve signatures with deterministic nonces.
//!
//! ## Security Properties
//!
//! - No RNG dependency (deterministic nonce from message)
//! - Complete addition formulas (no conditional branches)
//! - Secret key material is zeroized on drop, including exported seeds

use crate::hashing::address_from_public_key;
use crate::CryptoError;
use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use shared_types::{Address, PublicKey, Signature};
use zeroize::Zeroizing;

/// Ed25519 public key (32 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey(PublicKey);

impl Ed25519PublicKey {
    /// Create from bytes, rejecting encodings that are not curve points.
    pub fn from_bytes(bytes: PublicKey) -> Result<Self, CryptoError> {
        VerifyingKey::from_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Create from a slice of arbitrary length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let array: PublicKey = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidKeyLength {
                expected: 32,
                actual: bytes.len(),
            })?;
        Self::from_bytes(array)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &PublicKey {
        &self.0
    }

    /// Account address derived from this key.
    pub fn address(&self) -> Address {
        address_from_public_key(&self.0)
    }

    /// Verify a signature.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> Result<(), CryptoError> {
        let verifying_key =
            VerifyingKey::from_bytes(&self.0).map_err(|_| CryptoError::InvalidPublicKey)?;

        let sig = ed25519_dalek::Signature::from_bytes(&signature.0);

        verifying_key
            .verify_strict(message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

/// Ed25519 signature (64 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ed25519Signature(Signature);

impl Ed25519Signature {
    /// Create from bytes.
    pub fn from_bytes(bytes: Signature) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &Signature {
        &self.0
    }
}

/// Ed25519 keypair.
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
}

impl Ed25519KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret seed (32 bytes).
    pub fn from_seed(seed: [u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(&seed);
        Self { signing_key }
    }

    /// Get public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        let verifying_key = self.signing_key.verifying_key();
        Ed25519PublicKey(verifying_key.to_bytes())
    }

    /// Sign a message (deterministic - no RNG needed).
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        let sig = self.signing_key.sign(message);
        Ed25519Signature(sig.to_bytes())
    }

    /// Secret seed, wiped when the returned buffer is dropped.
    pub fn to_seed(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.signing_key.to_bytes())
    }
}
