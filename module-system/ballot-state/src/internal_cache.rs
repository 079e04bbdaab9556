use std::collections::{BTreeMap, HashMap};

use crate::storage::{StorageKey, StorageValue};
use crate::Storage;

/// Caches reads and writes for a (key, value) pair. On the first read the value is fetched
/// from the underlying [`Storage`]. On following reads, the cache answers with the
/// latest write or the value it read before.
#[derive(Default)]
pub(crate) struct StorageInternalCache {
    first_reads: HashMap<StorageKey, Option<StorageValue>>,
    last_writes: BTreeMap<StorageKey, StorageValue>,
    ordered_db_reads: Vec<(StorageKey, Option<StorageValue>)>,
}

/// A struct that contains the values read from the storage and the values to be written, both in
/// deterministic order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderedReadsAndWrites {
    /// Reads that reached the storage, in the order they happened.
    pub ordered_reads: Vec<(StorageKey, Option<StorageValue>)>,
    /// Writes sorted by key, one per key.
    pub ordered_writes: Vec<(StorageKey, StorageValue)>,
}

impl From<StorageInternalCache> for OrderedReadsAndWrites {
    fn from(val: StorageInternalCache) -> Self {
        Self {
            ordered_reads: val.ordered_db_reads,
            ordered_writes: val.last_writes.into_iter().collect(),
        }
    }
}

impl StorageInternalCache {
    /// Gets a value from the cache or reads it from the provided storage.
    pub(crate) fn get_or_fetch<S: Storage>(
        &mut self,
        key: &StorageKey,
        value_reader: &S,
    ) -> Option<StorageValue> {
        if let Some(written) = self.last_writes.get(key) {
            return Some(written.clone());
        }

        if let Some(read) = self.first_reads.get(key) {
            return read.clone();
        }

        let storage_value = value_reader.get(key);
        self.first_reads.insert(key.clone(), storage_value.clone());
        self.ordered_db_reads
            .push((key.clone(), storage_value.clone()));
        storage_value
    }

    pub(crate) fn set(&mut self, key: &StorageKey, value: StorageValue) {
        self.last_writes.insert(key.clone(), value);
    }
}
