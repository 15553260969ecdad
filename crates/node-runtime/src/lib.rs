//! # SignedPost Node Runtime
//!
//! A single-process host for the application. It has no networking: blocks
//! come from a transaction log instead of a consensus engine.
//!
//! ## Log Format
//!
//! ```text
//! # comment
//! <hex tx>        one transaction per line
//! <hex tx>
//!                 blank line closes the block
//! <hex tx>
//! ```
//!
//! For each block the runtime calls `begin_block`, then `check_tx` and
//! `append_tx` per transaction, then `end_block` and `commit`.

pub mod config;
pub mod replay;

pub use config::NodeConfig;
pub use replay::{replay, BlockSummary, ReplayError};
