//! # Inbound Ports
//!
//! Lifecycle surface called by the consensus host.

use shared_types::{BlockHeight, Hash, TxResult, Validator};

/// Lifecycle calls, in the order a host issues them for one block:
/// `begin_block`, `append_tx`*, `end_block`, `commit`. `check_tx` and
/// `query` may arrive at any time.
pub trait ApplicationApi {
    /// Read-only summary of committed state.
    fn info(&self) -> String;

    /// Acknowledged and ignored.
    fn set_option(&mut self, key: &str, value: &str) -> String;

    /// Acknowledged and ignored; this application has no validator logic.
    fn init_chain(&mut self, validators: &[Validator]);

    /// Validate `tx` against the check snapshot.
    fn check_tx(&mut self, tx: &[u8]) -> TxResult;

    /// Apply `tx` to committed state.
    fn append_tx(&mut self, tx: &[u8]) -> TxResult;

    /// Root hash of committed state; resets the check snapshot.
    fn commit(&mut self) -> Hash;

    /// Raw lookup against committed state.
    fn query(&self, key: &[u8]) -> TxResult;

    fn begin_block(&mut self, height: BlockHeight);

    /// Returns validator changes, always empty.
    fn end_block(&mut self, height: BlockHeight) -> Vec<Validator>;
}
