use serde::{Deserialize, Serialize};

/// A key-value pair representing a change in the state, emitted by a module call.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    borsh::BorshSerialize,
    borsh::BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct Event {
    key: String,
    value: String,
}

impl Event {
    /// Creates a new event.
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_owned(),
            value: value.to_owned(),
        }
    }

    /// The event key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The event value.
    pub fn value(&self) -> &str {
        &self.value
    }
}
