//! # Signature Envelope (SP-02)
//!
//! Turns domain actions into signed transaction blobs and back.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): actions, the discriminant registry, the
//!   envelope and validated-action entities
//! - **Ports Layer** (`ports/`): the `EnvelopeCodecApi` driving port
//! - **Service Layer** (`service.rs`): `Codec`, which owns a registry and a
//!   `CodecConfig` and implements the port
//!
//! ## Wire Format
//!
//! ```text
//! payload  = discriminant (1 byte) || bincode(action body)
//! envelope = bincode { payload: Vec<u8>, signature: [u8; 64], signer: [u8; 32] }
//! ```
//!
//! The signature covers `payload` exactly. `receive` rejects, in order:
//! undecodable envelopes (`MalformedInput`), bad signatures
//! (`InvalidSignature`), and discriminants the registry does not know
//! (`UnknownActionType`).

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use config::CodecConfig;
pub use domain::actions::{Action, ActionKind, AddPost, CreateAccount};
pub use domain::envelope::{SignedEnvelope, ValidatedAction};
pub use domain::errors::{EnvelopeError, RegistryError};
pub use domain::registry::{ActionRegistry, ADD_POST_DISCRIMINANT, CREATE_ACCOUNT_DISCRIMINANT};
pub use ports::inbound::EnvelopeCodecApi;
pub use service::Codec;
