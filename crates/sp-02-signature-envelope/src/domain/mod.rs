//! Domain layer for the signature envelope.

pub mod actions;
pub mod envelope;
pub mod errors;
pub mod registry;
