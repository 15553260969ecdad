//! # sp-01-merkle-store
//!
//! Authenticated store for SignedPost.
//!
//! ## Role in System
//!
//! - **External collaborator**: the application core only relies on the
//!   `MerkleStore` port (get, set, atomic batch, range scan, content hash,
//!   cheap copy). Any tree primitive honoring that port can be plugged in.
//! - **Reference adapter**: `MemoryMerkleStore` keeps entries in an
//!   `Arc<BTreeMap>`; `copy()` is an O(1) reference-count bump and the first
//!   write to a shared snapshot clones the map once (copy-on-write).
//!
//! ```text
//!   committed ──copy()──→ check        (shared, O(1))
//!       │                   │
//!     set()               set()        (first write detaches, O(n) once)
//!       ↓                   ↓
//!   private map         private map
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
