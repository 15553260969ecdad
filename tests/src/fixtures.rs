//! Shared helpers for building signed transactions.

use shared_crypto::Ed25519KeyPair;
use shared_types::Address;
use sp_01_merkle_store::MemoryMerkleStore;
use sp_02_signature_envelope::{Action, Codec, EnvelopeCodecApi};
use sp_05_application::{Application, ApplicationConfig};

/// Deterministic key pair number `n`.
pub fn keypair(n: u8) -> Ed25519KeyPair {
    Ed25519KeyPair::from_seed([n.wrapping_add(1); 32])
}

pub fn address(n: u8) -> Address {
    keypair(n).public_key().address()
}

/// Sign `action` with the standard codec.
pub fn sign(action: &Action, key: &Ed25519KeyPair) -> Vec<u8> {
    match Codec::standard().sign(action, key) {
        Ok(tx) => tx,
        Err(err) => panic!("signing {action:?} failed: {err}"),
    }
}

pub fn fresh_app() -> Application<MemoryMerkleStore> {
    Application::in_memory(&ApplicationConfig::default())
}
