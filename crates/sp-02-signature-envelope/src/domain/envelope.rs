//! # Envelope Entities

use crate::domain::actions::Action;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use shared_crypto::Ed25519PublicKey;
use shared_types::{Address, PublicKey, Signature};

/// Signed transaction as it travels on the wire.
///
/// Produced by the signer, consumed once by `receive`, never persisted.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedEnvelope {
    /// Discriminant byte followed by the encoded action body.
    pub payload: Vec<u8>,
    /// Ed25519 signature over `payload`.
    #[serde_as(as = "Bytes")]
    pub signature: Signature,
    /// Ed25519 public key of the signer.
    pub signer: PublicKey,
}

/// An action together with the signer that authorised it.
///
/// The signer is only exposed when the validity flag is set, so an
/// anonymous action can never be mistaken for a signed one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedAction {
    action: Action,
    signer: Option<Ed25519PublicKey>,
    valid: bool,
}

impl ValidatedAction {
    pub(crate) fn verified(action: Action, signer: Ed25519PublicKey) -> Self {
        Self {
            action,
            signer: Some(signer),
            valid: true,
        }
    }

    /// An action with no verified signer.
    pub fn anonymous(action: Action) -> Self {
        Self {
            action,
            signer: None,
            valid: false,
        }
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn signer(&self) -> Option<&Ed25519PublicKey> {
        if self.valid {
            self.signer.as_ref()
        } else {
            None
        }
    }

    pub fn signer_address(&self) -> Option<Address> {
        self.signer().map(Ed25519PublicKey::address)
    }
}
