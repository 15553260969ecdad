//! # Envelope Codec Service
//!
//! Implements `EnvelopeCodecApi` on top of a shared `ActionRegistry`.

use crate::config::CodecConfig;
use crate::domain::actions::{Action, ActionKind, AddPost, CreateAccount};
use crate::domain::envelope::{SignedEnvelope, ValidatedAction};
use crate::domain::errors::EnvelopeError;
use crate::domain::registry::ActionRegistry;
use crate::ports::inbound::EnvelopeCodecApi;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_crypto::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
use shared_types::wire;
use std::sync::Arc;
use tracing::trace;

/// Transaction codec bound to one registry.
#[derive(Clone, Debug)]
pub struct Codec {
    registry: Arc<ActionRegistry>,
    config: CodecConfig,
}

impl Codec {
    pub fn new(registry: Arc<ActionRegistry>, config: CodecConfig) -> Self {
        Self { registry, config }
    }

    /// Codec over `ActionRegistry::standard()` with default limits.
    pub fn standard() -> Self {
        Self::new(Arc::new(ActionRegistry::standard()), CodecConfig::default())
    }

    pub fn registry(&self) -> &Arc<ActionRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn payload_limit(&self) -> u64 {
        self.config.max_payload_bytes as u64
    }

    fn encode_body<T: Serialize>(&self, discriminant: u8, body: &T) -> Result<Vec<u8>, EnvelopeError> {
        let encoded =
            wire::encode(body, u64::MAX).map_err(|e| EnvelopeError::EncodingFailed(e.to_string()))?;
        let size = encoded.len() + 1;
        if size > self.config.max_payload_bytes {
            return Err(EnvelopeError::PayloadTooLarge {
                size,
                max: self.config.max_payload_bytes,
            });
        }
        let mut payload = Vec::with_capacity(size);
        payload.push(discriminant);
        payload.extend_from_slice(&encoded);
        Ok(payload)
    }

    fn decode_body<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, EnvelopeError> {
        wire::decode(body, self.payload_limit())
            .map_err(|e| EnvelopeError::MalformedInput(e.to_string()))
    }
}

impl EnvelopeCodecApi for Codec {
    fn encode_action(&self, action: &Action) -> Result<Vec<u8>, EnvelopeError> {
        let kind = action.kind();
        let discriminant = self
            .registry
            .discriminant_of(kind)
            .ok_or_else(|| EnvelopeError::EncodingFailed(format!("{kind} is not registered")))?;

        match action {
            Action::CreateAccount(body) => self.encode_body(discriminant, body),
            Action::AddPost(body) => self.encode_body(discriminant, body),
        }
    }

    fn decode_action(&self, payload: &[u8]) -> Result<Action, EnvelopeError> {
        let (&discriminant, body) = payload
            .split_first()
            .ok_or_else(|| EnvelopeError::MalformedInput("empty payload".into()))?;

        match self.registry.kind_of(discriminant) {
            Some(ActionKind::CreateAccount) => {
                Ok(Action::CreateAccount(self.decode_body::<CreateAccount>(body)?))
            }
            Some(ActionKind::AddPost) => Ok(Action::AddPost(self.decode_body::<AddPost>(body)?)),
            None => Err(EnvelopeError::UnknownActionType(discriminant)),
        }
    }

    fn seal(&self, action: &Action, key: &Ed25519KeyPair) -> Result<SignedEnvelope, EnvelopeError> {
        let payload = self.encode_action(action)?;
        let signature = key.sign(&payload);
        Ok(SignedEnvelope {
            payload,
            signature: *signature.as_bytes(),
            signer: *key.public_key().as_bytes(),
        })
    }

    fn sign(&self, action: &Action, key: &Ed25519KeyPair) -> Result<Vec<u8>, EnvelopeError> {
        let envelope = self.seal(action, key)?;
        let tx = wire::encode(&envelope, u64::MAX)
            .map_err(|e| EnvelopeError::EncodingFailed(e.to_string()))?;
        if tx.len() > self.config.max_tx_bytes {
            return Err(EnvelopeError::PayloadTooLarge {
                size: tx.len(),
                max: self.config.max_tx_bytes,
            });
        }
        Ok(tx)
    }

    fn open(&self, envelope: &SignedEnvelope) -> Result<ValidatedAction, EnvelopeError> {
        if envelope.payload.len() > self.config.max_payload_bytes {
            return Err(EnvelopeError::MalformedInput(format!(
                "payload of {} bytes exceeds {}",
                envelope.payload.len(),
                self.config.max_payload_bytes
            )));
        }

        let signer = Ed25519PublicKey::from_bytes(envelope.signer)
            .map_err(|_| EnvelopeError::InvalidSignature)?;
        signer
            .verify(&envelope.payload, &Ed25519Signature::from_bytes(envelope.signature))
            .map_err(|_| EnvelopeError::InvalidSignature)?;

        let action = self.decode_action(&envelope.payload)?;
        trace!(kind = %action.kind(), signer = %hex::encode(signer.address()), "Envelope verified");
        Ok(ValidatedAction::verified(action, signer))
    }

    fn receive(&self, tx: &[u8]) -> Result<ValidatedAction, EnvelopeError> {
        if tx.len() > self.config.max_tx_bytes {
            return Err(EnvelopeError::MalformedInput(format!(
                "transaction of {} bytes exceeds {}",
                tx.len(),
                self.config.max_tx_bytes
            )));
        }
        let envelope: SignedEnvelope = wire::decode(tx, self.config.max_tx_bytes as u64)
            .map_err(|e| EnvelopeError::MalformedInput(e.to_string()))?;
        self.open(&envelope)
    }
}
