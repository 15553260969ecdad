//! # Inbound Ports
//!
//! Public API of the envelope codec.

use crate::domain::actions::Action;
use crate::domain::envelope::{SignedEnvelope, ValidatedAction};
use crate::domain::errors::EnvelopeError;
use shared_crypto::Ed25519KeyPair;

/// Encode, sign and verify transactions.
///
/// Every method is deterministic: the same inputs always produce the same
/// bytes, on every replica.
pub trait EnvelopeCodecApi: Send + Sync {
    /// Discriminant byte followed by the canonical body encoding.
    fn encode_action(&self, action: &Action) -> Result<Vec<u8>, EnvelopeError>;

    /// Inverse of `encode_action`.
    fn decode_action(&self, payload: &[u8]) -> Result<Action, EnvelopeError>;

    /// Encode `action` and sign the payload, without serializing the envelope.
    fn seal(&self, action: &Action, key: &Ed25519KeyPair) -> Result<SignedEnvelope, EnvelopeError>;

    /// Produce a self-contained transaction blob.
    fn sign(&self, action: &Action, key: &Ed25519KeyPair) -> Result<Vec<u8>, EnvelopeError>;

    /// Verify an already-decoded envelope and decode its action.
    fn open(&self, envelope: &SignedEnvelope) -> Result<ValidatedAction, EnvelopeError>;

    /// Decode a transaction blob, verify it and decode its action.
    fn receive(&self, tx: &[u8]) -> Result<ValidatedAction, EnvelopeError>;
}
