//! The [`Context`] used by the CLI and the tests.

use ballot_state::MemoryStorage;
use serde::{Deserialize, Serialize};

use crate::{Address, Context, Spec};

/// A [`Context`] over the in-memory storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultContext {
    /// The authenticated sender.
    pub sender: Address,
    /// The slot height the call executes at.
    pub height: u64,
}

impl Spec for DefaultContext {
    type Address = Address;
    type Storage = MemoryStorage;
    type Hasher = sha2::Sha256;
}

impl Context for DefaultContext {
    fn sender(&self) -> &Self::Address {
        &self.sender
    }

    fn new(sender: Self::Address, height: u64) -> Self {
        Self { sender, height }
    }

    fn slot_height(&self) -> u64 {
        self.height
    }
}
