//! # Shared Types Crate
//!
//! This crate contains the primitive entities and the `TxResult` shape used
//! across the SignedPost workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Byte-width aliases (`Address`, `Hash`, ...)
//!   are defined once here.
//! - **Stable Codes**: `ResultCode` values are part of the host contract and
//!   must never be renumbered.

pub mod entities;
pub mod errors;
pub mod result;
pub mod wire;

pub use entities::*;
pub use errors::*;
pub use result::*;
pub use wire::WireError;
