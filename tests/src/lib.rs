//! # SignedPost Test Suite
//!
//! ```text
//! tests/src/
//! ├── integration/   # Full lifecycle through the application adapter
//! └── properties/    # proptest invariants (envelope, keys, replay)
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sp-tests
//! cargo test -p sp-tests properties::
//! cargo bench -p sp-tests
//! ```

pub mod fixtures;
pub mod integration;
pub mod properties;
