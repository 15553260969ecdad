use crate::config::ApplicationConfig;
use crate::ports::inbound::ApplicationApi;
use shared_types::{BlockHeight, Hash, ResultCode, TxResult, Validator};
use sp_01_merkle_store::{MemoryMerkleStore, MerkleStore};
use sp_02_signature_envelope::{ActionRegistry, Codec, EnvelopeCodecApi};
use sp_04_tx_processor::Processor;
use std::sync::Arc;
use tracing::{debug, info};

/// Dual-state application over any `MerkleStore`.
pub struct Application<S: MerkleStore> {
    committed: S,
    check: S,
    height: BlockHeight,
    codec: Codec,
    processor: Processor,
}

impl<S: MerkleStore> Application<S> {
    /// Wrap `store` as committed state. The codec and processor share
    /// `registry`.
    pub fn new(store: S, registry: Arc<ActionRegistry>, config: &ApplicationConfig) -> Self {
        let check = store.copy();
        Self {
            committed: store,
            check,
            height: config.initial_height,
            codec: Codec::new(registry.clone(), config.codec.clone()),
            processor: Processor::new(registry),
        }
    }

    pub fn height(&self) -> BlockHeight {
        self.height
    }

    /// Committed snapshot, for read-side queries.
    pub fn committed(&self) -> &S {
        &self.committed
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    fn deliver(&mut self, tx: &[u8], target: Target) -> TxResult {
        let validated = match self.codec.receive(tx) {
            Ok(validated) => validated,
            Err(err) => {
                debug!(?target, code = ?err.code(), error = %err, "Transaction rejected by codec");
                return TxResult::error(err.code(), err.to_string());
            }
        };

        let store = match target {
            Target::Check => &mut self.check,
            Target::Committed => &mut self.committed,
        };
        let result = self.processor.apply(store, &validated, self.height);
        debug!(?target, height = self.height, code = ?result.code, "Transaction processed");
        result
    }
}

impl Application<MemoryMerkleStore> {
    /// Empty in-memory application with the standard action registry.
    pub fn in_memory(config: &ApplicationConfig) -> Self {
        Self::new(
            MemoryMerkleStore::with_config(config.store.clone()),
            Arc::new(ActionRegistry::standard()),
            config,
        )
    }
}

#[derive(Clone, Copy, Debug)]
enum Target {
    Check,
    Committed,
}

impl<S: MerkleStore> ApplicationApi for Application<S> {
    fn info(&self) -> String {
        format!("size:{} height:{}", self.committed.size(), self.height)
    }

    fn set_option(&mut self, key: &str, value: &str) -> String {
        debug!(key, value, "Ignoring option");
        "ignored".to_string()
    }

    fn init_chain(&mut self, validators: &[Validator]) {
        info!(validators = validators.len(), "Chain initialised; validator set ignored");
    }

    fn check_tx(&mut self, tx: &[u8]) -> TxResult {
        self.deliver(tx, Target::Check)
    }

    fn append_tx(&mut self, tx: &[u8]) -> TxResult {
        self.deliver(tx, Target::Committed)
    }

    fn commit(&mut self) -> Hash {
        self.check = self.committed.copy();
        let hash = self.committed.root_hash();
        info!(
            height = self.height,
            size = self.committed.size(),
            hash = %hex::encode(hash),
            "Committed"
        );
        hash
    }

    fn query(&self, key: &[u8]) -> TxResult {
        let result = match self.committed.get(key) {
            Ok(Some(value)) => TxResult::ok(value),
            Ok(None) => TxResult::error(ResultCode::UnknownAddress, "not found"),
            Err(err) => TxResult::error(ResultCode::InternalError, err.to_string()),
        };
        debug!(key = %hex::encode(key), code = ?result.code, "Query");
        result
    }

    fn begin_block(&mut self, height: BlockHeight) {
        debug!(height, "Begin block");
        self.height = height;
    }

    fn end_block(&mut self, height: BlockHeight) -> Vec<Validator> {
        self.height = height + 1;
        info!(height, next = self.height, "End block");
        Vec::new()
    }
}
