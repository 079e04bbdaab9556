use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{Context, ErrorCode, Event, Module, StateCheckpoint};

/// The outcome of a single call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxEffect {
    /// The call failed and none of its writes were kept.
    Reverted,
    /// The call was processed successfully.
    Successful,
}

/// What a caller gets back from [`dispatch_call`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    /// The events emitted by the call. Always empty when the call was reverted.
    pub events: Vec<Event>,
    /// Whether the call was kept or reverted.
    pub receipt: TxEffect,
    /// The reason of the revert, if any.
    pub error: Option<String>,
    /// Stable identity of the revert reason, when the module defines one.
    pub error_code: Option<ErrorCode>,
}

impl TransactionReceipt {
    /// Returns `true` if the call was kept.
    pub fn is_successful(&self) -> bool {
        self.receipt == TxEffect::Successful
    }
}

/// Runs a single call of `module` on top of `checkpoint`.
///
/// The call runs in its own revertable working set: if it returns an error every write it
/// made is dropped, along with its events, and the returned checkpoint is the one that was
/// passed in. Calls must be dispatched one at a time, each on the checkpoint returned by
/// the previous one.
pub fn dispatch_call<M: Module>(
    module: &M,
    message: M::CallMessage,
    context: &M::Context,
    checkpoint: StateCheckpoint<M::Context>,
) -> (TransactionReceipt, StateCheckpoint<M::Context>) {
    let mut working_set = checkpoint.to_revertable();

    debug!(
        sender = %context.sender(),
        height = context.slot_height(),
        ?message,
        "Dispatching call"
    );

    let result = module.call(message, context, &mut working_set);
    let events = working_set.take_events();

    match result {
        Ok(_) => {
            debug!(events = events.len(), "Call was successful");
            let receipt = TransactionReceipt {
                events,
                receipt: TxEffect::Successful,
                error: None,
                error_code: None,
            };
            (receipt, working_set.checkpoint())
        }
        Err(e) => {
            let error_code = module.error_code(&e);
            info!(
                sender = %context.sender(),
                code = ?error_code,
                "Call was reverted: {}",
                e
            );
            let receipt = TransactionReceipt {
                events: Vec::new(),
                receipt: TxEffect::Reverted,
                error: Some(e.to_string()),
                error_code,
            };
            (receipt, working_set.revert())
        }
    }
}
