use shared_types::{BlockHeight, ResultCode, TxResult};
use sp_01_merkle_store::MerkleStore;
use sp_02_signature_envelope::{Action, ActionRegistry, ValidatedAction};
use sp_03_post_store::{append_post, create_account};
use std::sync::Arc;
use tracing::debug;

/// Dispatches validated actions to the post store.
#[derive(Clone, Debug)]
pub struct Processor {
    registry: Arc<ActionRegistry>,
}

impl Processor {
    /// `registry` must be the instance the codec decodes with.
    pub fn new(registry: Arc<ActionRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ActionRegistry> {
        &self.registry
    }

    /// Apply `validated` to `store`. A failed action leaves `store` untouched.
    pub fn apply<S: MerkleStore>(
        &self,
        store: &mut S,
        validated: &ValidatedAction,
        height: BlockHeight,
    ) -> TxResult {
        let action = validated.action();
        let kind = action.kind();
        if !self.registry.is_enabled(kind) {
            debug!(%kind, "Action kind disabled");
            return TxResult::error(ResultCode::InvalidInput, format!("{kind} is not enabled"));
        }

        let signer = validated.signer_address();
        let outcome = match action {
            Action::CreateAccount(body) => create_account(store, &body.name, signer),
            Action::AddPost(body) => append_post(store, &body.title, &body.content, signer, height),
        };

        match outcome {
            Ok(key) => {
                debug!(%kind, height, key = %hex::encode(&key), "Action applied");
                TxResult::ok(key)
            }
            Err(err) => {
                debug!(%kind, height, code = ?err.code(), error = %err, "Action rejected");
                TxResult::error(err.code(), err.to_string())
            }
        }
    }
}
