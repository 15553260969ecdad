//! Property tests.

pub mod envelope;
pub mod keys;
pub mod replay;
