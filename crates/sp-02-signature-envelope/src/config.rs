//! Codec limits.

/// Size limits enforced by the codec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// Largest serialized envelope accepted by `receive` or produced by `sign`.
    pub max_tx_bytes: usize,
    /// Largest action payload (discriminant + body).
    pub max_payload_bytes: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_tx_bytes: 64 * 1024,
            max_payload_bytes: 32 * 1024,
        }
    }
}
