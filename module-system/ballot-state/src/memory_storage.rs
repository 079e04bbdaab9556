use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::internal_cache::OrderedReadsAndWrites;
use crate::storage::{Storage, StorageKey, StorageValue};

/// An ordered, in-memory key-value [`Storage`].
///
/// Clones share the same underlying map, so a checkpoint committed through one
/// handle is visible through every other handle.
#[derive(Clone, Default, Debug)]
pub struct MemoryStorage {
    db: Arc<RwLock<BTreeMap<StorageKey, StorageValue>>>,
}

/// Serializable image of a [`MemoryStorage`], with keys and values hex encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSnapshot {
    /// `(key, value)` pairs in key order.
    pub entries: Vec<(String, String)>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a storage from a snapshot taken with [`MemoryStorage::snapshot`].
    pub fn from_snapshot(snapshot: &StorageSnapshot) -> anyhow::Result<Self> {
        let mut db = BTreeMap::new();
        for (key, value) in &snapshot.entries {
            let key = hex::decode(key).with_context(|| format!("Invalid snapshot key {key}"))?;
            let value =
                hex::decode(value).with_context(|| format!("Invalid snapshot value {value}"))?;
            db.insert(StorageKey::from(key), StorageValue::from(value));
        }

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Takes a snapshot of all the committed entries.
    pub fn snapshot(&self) -> StorageSnapshot {
        let db = self.db.read().unwrap_or_else(PoisonError::into_inner);
        let entries = db
            .iter()
            .map(|(k, v)| (hex::encode(k.as_ref()), hex::encode(v.value())))
            .collect();

        StorageSnapshot { entries }
    }

    /// Returns the number of committed entries.
    pub fn len(&self) -> usize {
        self.db.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &StorageKey) -> Option<StorageValue> {
        self.db
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn commit(&self, state_accesses: &OrderedReadsAndWrites) -> anyhow::Result<()> {
        let mut db = self
            .db
            .write()
            .map_err(|_| anyhow::anyhow!("Memory storage lock is poisoned"))?;

        for (key, value) in &state_accesses.ordered_writes {
            db.insert(key.clone(), value.clone());
        }

        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
