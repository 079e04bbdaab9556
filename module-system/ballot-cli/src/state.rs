//! Persistence of the module state between invocations.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use ballot::{BallotConfig, Ballots};
use ballot_modules_api::{MemoryStorage, Module, StorageSnapshot, WorkingSet};
use tracing::{debug, info};

use crate::Ctx;

/// Loads the storage saved at `path`.
///
/// If there is no file yet, a fresh storage is created and the module genesis is run on it
/// with `config`.
pub fn load(path: impl AsRef<Path>, config: &BallotConfig) -> anyhow::Result<MemoryStorage> {
    let path = path.as_ref();
    if path.exists() {
        debug!("Loading state from {}", path.display());
        let data = fs::read(path)
            .with_context(|| format!("Failed to read state file {}", path.display()))?;
        let snapshot: StorageSnapshot = serde_json::from_slice(&data)
            .with_context(|| format!("Invalid state file {}", path.display()))?;
        return MemoryStorage::from_snapshot(&snapshot);
    }

    info!("No state at {}, running genesis", path.display());
    let storage = MemoryStorage::new();
    let mut working_set = WorkingSet::<Ctx>::new(storage.clone());
    Ballots::<Ctx>::default()
        .genesis(config, &mut working_set)
        .context("Genesis failed")?;
    working_set.checkpoint().commit()
}

/// Saves the committed entries of `storage` to `path`.
pub fn save(storage: &MemoryStorage, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let data = serde_json::to_string_pretty(&storage.snapshot())?;
    fs::write(path, data)
        .with_context(|| format!("Failed to write state file {}", path.display()))?;
    Ok(())
}
