//! # Transaction Log Replay

use shared_types::{BlockHeight, Hash};
use sp_05_application::ApplicationApi;
use std::io::BufRead;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Line {line}: invalid hex transaction: {reason}")]
    InvalidHex { line: usize, reason: String },

    #[error("Failed to read transaction log: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of one replayed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSummary {
    pub height: BlockHeight,
    pub accepted: usize,
    pub rejected: usize,
    pub root: Hash,
}

/// Feed every block in `reader` through `app`, starting at height 1.
///
/// A transaction that fails `check_tx` is dropped, as a mempool would drop
/// it, and never reaches `append_tx`. Blank lines with no pending
/// transactions are ignored; a trailing block without a closing blank line
/// is still committed.
pub fn replay<A, R>(app: &mut A, reader: R) -> Result<Vec<BlockSummary>, ReplayError>
where
    A: ApplicationApi,
    R: BufRead,
{
    let mut blocks = Vec::new();
    let mut pending: Vec<Vec<u8>> = Vec::new();
    let mut height: BlockHeight = 1;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        if line.is_empty() {
            if !pending.is_empty() {
                blocks.push(run_block(app, height, &pending));
                pending.clear();
                height += 1;
            }
            continue;
        }

        let tx = hex::decode(line).map_err(|e| ReplayError::InvalidHex {
            line: index + 1,
            reason: e.to_string(),
        })?;
        pending.push(tx);
    }

    if !pending.is_empty() {
        blocks.push(run_block(app, height, &pending));
    }
    Ok(blocks)
}

fn run_block<A: ApplicationApi>(app: &mut A, height: BlockHeight, txs: &[Vec<u8>]) -> BlockSummary {
    app.begin_block(height);

    let mut accepted = 0;
    let mut rejected = 0;
    for (position, tx) in txs.iter().enumerate() {
        let checked = app.check_tx(tx);
        let result = if checked.is_ok() {
            app.append_tx(tx)
        } else {
            checked
        };

        if result.is_ok() {
            accepted += 1;
        } else {
            rejected += 1;
            warn!(height, position, code = ?result.code, log = %result.log, "Transaction rejected");
        }
    }

    app.end_block(height);
    let root = app.commit();
    info!(height, accepted, rejected, root = %hex::encode(root), "Block replayed");

    BlockSummary {
        height,
        accepted,
        rejected,
        root,
    }
}
