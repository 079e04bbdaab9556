use std::marker::PhantomData;

use thiserror::Error;

use crate::codec::{BorshCodec, StateCodec, StateKeyCodec, StateValueCodec};
use crate::storage::StorageKey;
use crate::{Prefix, StateReaderAndWriter, Storage, WorkingSet};

/// A keyed collection living under a single [`Prefix`].
///
/// Entries are written with [`StateMap::set`] and never removed: setting an
/// existing key overwrites its value.
///
/// ```
/// use ballot_state::{MemoryStorage, Prefix, StateMap, WorkingSet};
///
/// let tallies: StateMap<(u64, String), u64> = StateMap::new(Prefix::new(b"tallies/".to_vec()));
/// let mut working_set = WorkingSet::new(MemoryStorage::new());
///
/// let key = (1, "alice".to_owned());
/// tallies.set(&key, &3, &mut working_set);
/// assert_eq!(tallies.get(&key, &mut working_set), Some(3));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    borsh::BorshDeserialize,
    borsh::BorshSerialize,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct StateMap<K, V, Codec = BorshCodec> {
    _phantom: (PhantomData<K>, PhantomData<V>),
    codec: Codec,
    prefix: Prefix,
}

/// Returned by [`StateMap::get_or_err`] when the key has no entry.
#[derive(Debug, Error)]
pub enum StateMapError {
    /// No entry at this key.
    #[error("Value not found for prefix: {0} and: storage key {1}")]
    MissingValue(Prefix, StorageKey),
}

impl<K, V> StateMap<K, V> {
    /// Creates a borsh encoded map under `prefix`.
    pub fn new(prefix: Prefix) -> Self {
        Self::with_codec(prefix, BorshCodec)
    }
}

impl<K, V, Codec> StateMap<K, V, Codec> {
    /// Creates a map under `prefix` encoded with `codec`.
    pub fn with_codec(prefix: Prefix, codec: Codec) -> Self {
        Self {
            _phantom: (PhantomData, PhantomData),
            codec,
            prefix,
        }
    }

    /// The prefix every key of this map starts with.
    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }
}

impl<K, V, Codec> StateMap<K, V, Codec>
where
    Codec: StateCodec,
    Codec::KeyCodec: StateKeyCodec<K>,
    Codec::ValueCodec: StateValueCodec<V>,
{
    /// Writes `value` at `key`, replacing the previous value if any.
    pub fn set<S: Storage>(&self, key: &K, value: &V, working_set: &mut WorkingSet<S>) {
        working_set.set_value(&self.prefix, key, value, &self.codec)
    }

    /// Reads the value at `key`.
    pub fn get<S: Storage>(&self, key: &K, working_set: &mut WorkingSet<S>) -> Option<V> {
        working_set.get_value(&self.prefix, key, &self.codec)
    }

    /// Reads the value at `key`, failing with [`StateMapError`] if there is none.
    pub fn get_or_err<S: Storage>(
        &self,
        key: &K,
        working_set: &mut WorkingSet<S>,
    ) -> Result<V, StateMapError> {
        self.get(key, working_set).ok_or_else(|| {
            StateMapError::MissingValue(
                self.prefix.clone(),
                StorageKey::new(&self.prefix, key, self.codec.key_codec()),
            )
        })
    }
}
