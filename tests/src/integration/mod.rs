//! Cross-crate flows driven through `ApplicationApi`.

pub mod lifecycle;
