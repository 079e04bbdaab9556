#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

mod address;
mod bech32;
pub mod default_context;
mod dispatch;
mod error;
mod module;
mod response;
pub mod utils;

pub use address::{Address, BasicAddress};
pub use ballot_state::codec::{BorshCodec, JsonCodec};
pub use ballot_state::{
    Event, MemoryStorage, Prefix, StateMap, StateMapError, StateReaderAndWriter, StateValue,
    StateValueError, Storage, StorageSnapshot,
};
pub use crate::bech32::AddressBech32;
pub use dispatch::{dispatch_call, TransactionReceipt, TxEffect};
pub use error::{Bech32ParseError, ModuleError};
pub use module::{Context, ErrorCode, Module, Spec};
pub use response::CallResponse;
pub use sha2::Digest;

/// The working set of a module running under the context `C`.
pub type WorkingSet<C> = ballot_state::WorkingSet<<C as Spec>::Storage>;

/// The state checkpoint of a module running under the context `C`.
pub type StateCheckpoint<C> = ballot_state::StateCheckpoint<<C as Spec>::Storage>;
