//! # SignedPost Node Runtime
//!
//! ```text
//! node-runtime [TX_LOG]
//! ```
//!
//! Replays `TX_LOG` (or `$SP_TX_LOG`) through an in-memory application and
//! prints `<height> <root hash>` for every committed block.

use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use tracing::info;

use node_runtime::{replay, NodeConfig};
use sp_05_application::{Application, ApplicationApi};

fn main() -> Result<()> {
    let mut config = NodeConfig::from_env();
    if let Some(path) = std::env::args_os().nth(1) {
        config = config.with_tx_log(path);
    }

    sp_telemetry::init_telemetry(&config.telemetry).context("Failed to initialize telemetry")?;

    let path = config
        .tx_log
        .clone()
        .context("No transaction log given; pass a path or set SP_TX_LOG")?;
    let file = File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;

    let mut app = Application::in_memory(&config.application);
    let blocks = replay(&mut app, BufReader::new(file))
        .with_context(|| format!("Failed to replay {}", path.display()))?;

    for block in &blocks {
        println!("{} {}", block.height, hex::encode(block.root));
    }
    info!(blocks = blocks.len(), info = %app.info(), "Replay complete");
    Ok(())
}
