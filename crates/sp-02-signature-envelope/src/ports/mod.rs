//! Ports layer for the signature envelope.

pub mod inbound;
