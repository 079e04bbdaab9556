use std::collections::HashMap;
use std::fmt::Debug;

use crate::codec::{StateCodec, StateKeyCodec, StateValueCodec};
use crate::events::Event;
use crate::internal_cache::{OrderedReadsAndWrites, StorageInternalCache};
use crate::storage::{StorageKey, StorageValue};
use crate::{Prefix, Storage};

/// Byte level access to the state, plus typed helpers built on it.
pub trait StateReaderAndWriter {
    /// Reads the value at `key`.
    fn get(&mut self, key: &StorageKey) -> Option<StorageValue>;

    /// Writes the value at `key`.
    fn set(&mut self, key: &StorageKey, value: StorageValue);

    /// Encodes `key` under `prefix` and `value` with `codec`, then writes them.
    fn set_value<K, V, Codec>(&mut self, prefix: &Prefix, key: &K, value: &V, codec: &Codec)
    where
        Codec: StateCodec,
        Codec::KeyCodec: StateKeyCodec<K>,
        Codec::ValueCodec: StateValueCodec<V>,
    {
        let storage_key = StorageKey::new(prefix, key, codec.key_codec());
        self.set(&storage_key, StorageValue::new(value, codec.value_codec()));
    }

    /// Writes a value addressed by the prefix alone. See [`StorageKey::singleton`].
    fn set_singleton<V, Codec>(&mut self, prefix: &Prefix, value: &V, codec: &Codec)
    where
        Codec: StateCodec,
        Codec::ValueCodec: StateValueCodec<V>,
    {
        let storage_key = StorageKey::singleton(prefix);
        self.set(&storage_key, StorageValue::new(value, codec.value_codec()));
    }

    /// Reads and decodes the value at `storage_key`.
    fn get_decoded<V, Codec>(&mut self, storage_key: &StorageKey, codec: &Codec) -> Option<V>
    where
        Codec: StateCodec,
        Codec::ValueCodec: StateValueCodec<V>,
    {
        let storage_value = self.get(storage_key)?;
        Some(codec.value_codec().decode_value_unwrap(storage_value.value()))
    }

    /// Reads and decodes the value of `key` under `prefix`.
    fn get_value<K, V, Codec>(&mut self, prefix: &Prefix, key: &K, codec: &Codec) -> Option<V>
    where
        Codec: StateCodec,
        Codec::KeyCodec: StateKeyCodec<K>,
        Codec::ValueCodec: StateValueCodec<V>,
    {
        let storage_key = StorageKey::new(prefix, key, codec.key_codec());
        self.get_decoded(&storage_key, codec)
    }

    /// Reads and decodes a value addressed by the prefix alone.
    fn get_singleton<V, Codec>(&mut self, prefix: &Prefix, codec: &Codec) -> Option<V>
    where
        Codec: StateCodec,
        Codec::ValueCodec: StateValueCodec<V>,
    {
        self.get_decoded(&StorageKey::singleton(prefix), codec)
    }
}

/// Accumulates reads and writes on top of the underlying storage.
struct Delta<S: Storage> {
    inner: S,
    cache: StorageInternalCache,
}

impl<S: Storage> Delta<S> {
    fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Default::default(),
        }
    }

    fn freeze(&mut self) -> OrderedReadsAndWrites {
        std::mem::take(&mut self.cache).into()
    }
}

impl<S: Storage> Debug for Delta<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Delta").finish()
    }
}

impl<S: Storage> StateReaderAndWriter for Delta<S> {
    fn get(&mut self, key: &StorageKey) -> Option<StorageValue> {
        self.cache.get_or_fetch(key, &self.inner)
    }

    fn set(&mut self, key: &StorageKey, value: StorageValue) {
        self.cache.set(key, value)
    }
}

/// The writes of a single call, kept apart from the [`Delta`] of the calls before it
/// until the call is known to have succeeded.
struct RevertableDelta<S: Storage> {
    /// The inner (non-revertable) delta
    inner: Delta<S>,
    /// Latest value written by the call at each key. Consulted before `inner`.
    writes: HashMap<StorageKey, StorageValue>,
}

impl<S: Storage> Debug for RevertableDelta<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevertableDelta")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<S: Storage> StateReaderAndWriter for RevertableDelta<S> {
    fn get(&mut self, key: &StorageKey) -> Option<StorageValue> {
        match self.writes.get(key) {
            Some(value) => Some(value.clone()),
            None => self.inner.get(key),
        }
    }

    fn set(&mut self, key: &StorageKey, value: StorageValue) {
        self.writes.insert(key.clone(), value);
    }
}

impl<S: Storage> RevertableDelta<S> {
    fn commit(self) -> Delta<S> {
        let mut inner = self.inner;
        for (key, value) in self.writes {
            inner.set(&key, value);
        }
        inner
    }

    fn revert(self) -> Delta<S> {
        self.inner
    }
}

/// This structure is responsible for storing the `read-write` set.
/// It is obtained from the [`WorkingSet`] by using either the `checkpoint` or `revert` method.
pub struct StateCheckpoint<S: Storage> {
    delta: Delta<S>,
}

impl<S: Storage> StateCheckpoint<S> {
    /// Creates a new checkpoint on top of the given storage.
    pub fn new(inner: S) -> Self {
        Self {
            delta: Delta::new(inner),
        }
    }

    /// Opens a revertable [`WorkingSet`] on top of this checkpoint.
    pub fn to_revertable(self) -> WorkingSet<S> {
        WorkingSet {
            delta: RevertableDelta {
                inner: self.delta,
                writes: Default::default(),
            },
            events: Default::default(),
        }
    }

    /// Extracts the accumulated reads and writes, leaving the checkpoint empty.
    pub fn freeze(&mut self) -> OrderedReadsAndWrites {
        self.delta.freeze()
    }

    /// Writes all the accumulated changes to the underlying storage.
    pub fn commit(mut self) -> anyhow::Result<S> {
        let accesses = self.freeze();
        self.delta.inner.commit(&accesses)?;
        Ok(self.delta.inner)
    }
}

/// This structure contains the read-write set and the events collected during the execution of a call.
/// There are two ways to convert it into a [`StateCheckpoint`]:
/// 1. By using the checkpoint() method, where all the changes are added to the underlying [`StateCheckpoint`].
/// 2. By using the revert method, where the most recent changes are reverted and the previous [`StateCheckpoint`] is returned.
pub struct WorkingSet<S: Storage> {
    delta: RevertableDelta<S>,
    events: Vec<Event>,
}

impl<S: Storage> WorkingSet<S> {
    /// Creates a new working set directly on top of the storage.
    pub fn new(inner: S) -> Self {
        StateCheckpoint::new(inner).to_revertable()
    }

    /// Keeps the changes made in this working set.
    pub fn checkpoint(self) -> StateCheckpoint<S> {
        StateCheckpoint {
            delta: self.delta.commit(),
        }
    }

    /// Drops the changes made in this working set, along with its events.
    pub fn revert(self) -> StateCheckpoint<S> {
        StateCheckpoint {
            delta: self.delta.revert(),
        }
    }

    /// Records an event.
    pub fn add_event(&mut self, key: &str, value: &str) {
        self.events.push(Event::new(key, value));
    }

    /// Takes all the events recorded so far.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Returns the events recorded so far.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the storage this working set reads from.
    pub fn backing(&self) -> &S {
        &self.delta.inner.inner
    }
}

impl<S: Storage> StateReaderAndWriter for WorkingSet<S> {
    fn get(&mut self, key: &StorageKey) -> Option<StorageValue> {
        self.delta.get(key)
    }

    fn set(&mut self, key: &StorageKey, value: StorageValue) {
        self.delta.set(key, value)
    }
}
