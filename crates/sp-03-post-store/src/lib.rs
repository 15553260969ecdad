//! # Post Store (SP-03)
//!
//! Accounts and their numbered posts, mapped onto an authenticated
//! `MerkleStore`.
//!
//! ## Layers
//!
//! - `domain`: entities, compound keys with range bounds, the stored
//!   `Model` union and `PostStoreError`
//! - `mapper`: `save` / `load` / `list` over any `MerkleStore`
//! - `commands`: `create_account` and `append_post`, validated before any
//!   write
//! - `queries`: read-side lookups and scans
//!
//! ## Key Layout
//!
//! ```text
//! account: 0x01 || address (20)
//! post:    0x02 || address (20) || number (u32 BE)
//! ```
//!
//! Byte order equals logical order, so a post range scan yields posts in
//! number order and an account range scan yields accounts in address order.

pub mod commands;
pub mod domain;
pub mod mapper;
pub mod queries;

pub use commands::{append_post, create_account};
pub use domain::*;
pub use mapper::{list, load, load_bytes, save, stage, Query};
pub use queries::*;
