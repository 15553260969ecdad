use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Empty keys cannot be stored")]
    EmptyKey,

    #[error("Key too long: max {max}, got {len}")]
    KeyTooLong { len: usize, max: usize },

    #[error("Value too long: max {max}, got {len}")]
    ValueTooLong { len: usize, max: usize },

    #[error("Database error: {0}")]
    DatabaseError(String),
}
