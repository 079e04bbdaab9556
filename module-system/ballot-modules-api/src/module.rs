//! Runtime module definitions.

use std::fmt::Debug;

use ballot_state::Storage;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use sha2::digest::consts::U32;
use sha2::Digest;

use crate::{BasicAddress, CallResponse, ModuleError, WorkingSet};

/// The `Spec` trait configures the primitives used by a particular instance of the
/// module system. It is implemented on a Context object; since all modules are
/// generic over a Context, swapping the Context swaps the primitives without
/// touching the modules.
pub trait Spec {
    /// The address type identifying senders and candidates.
    type Address: BasicAddress;

    /// The storage the working sets are built on.
    type Storage: Storage + Send + Sync;

    /// The hasher used to derive addresses.
    type Hasher: Digest<OutputSize = U32>;
}

/// A context contains information which is passed to modules during
/// a call: the authenticated sender and the height of the slot the call
/// is executed in.
///
/// The height is supplied by the environment and never by the caller's
/// payload. It is non-decreasing across calls.
pub trait Context: Spec + Clone + Debug + PartialEq + 'static {
    /// Sender of the call.
    fn sender(&self) -> &Self::Address;

    /// Constructor for the Context.
    fn new(sender: Self::Address, height: u64) -> Self;

    /// Returns the height of the current slot.
    fn slot_height(&self) -> u64;
}

/// The core trait implemented by all modules. This trait defines how a module is initialized at genesis,
/// and how it handles calls.
pub trait Module {
    /// Execution context.
    type Context: Context;

    /// Configuration for the genesis method.
    type Config;

    /// Module defined argument to the call method.
    type CallMessage: Debug + BorshSerialize + BorshDeserialize;

    /// Genesis is called once, when the state is created, and can be used to set initial state values in the module.
    fn genesis(
        &self,
        _config: &Self::Config,
        _working_set: &mut WorkingSet<Self::Context>,
    ) -> Result<(), ModuleError> {
        Ok(())
    }

    /// Call allows interaction with the module and invokes state changes.
    /// It takes a module defined type and a context as parameters.
    fn call(
        &self,
        message: Self::CallMessage,
        context: &Self::Context,
        working_set: &mut WorkingSet<Self::Context>,
    ) -> Result<CallResponse, ModuleError>;

    /// Maps an error returned by [`Module::call`] to its stable identifier and code.
    /// Returns `None` for errors the module gives no identity to.
    fn error_code(&self, _error: &ModuleError) -> Option<ErrorCode> {
        None
    }
}

/// Stable identity of a call failure, for callers to match on instead of the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCode {
    /// Name of the error kind, e.g. `AlreadyVoted`.
    pub id: String,
    /// Numeric code of the error kind.
    pub code: u32,
}
