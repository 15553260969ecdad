//! # Application Adapter (SP-05)
//!
//! The state machine a consensus host drives. It owns two snapshots of the
//! store:
//!
//! - **committed**: advanced only by `append_tx`, hashed by `commit`, read
//!   by `query`
//! - **check**: a copy of committed taken at every `commit`, used by
//!   `check_tx` and thrown away at the next commit
//!
//! Both paths decode with the same `Codec` and apply with the same
//! `Processor`, so a `check_tx` verdict predicts the `append_tx` verdict
//! for the same transaction against the same state.

pub mod application;
pub mod config;
pub mod ports;

pub use application::Application;
pub use config::ApplicationConfig;
pub use ports::inbound::ApplicationApi;
