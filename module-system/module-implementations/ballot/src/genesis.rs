use anyhow::{ensure, Result};
use ballot_modules_api::{Context, WorkingSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Ballots;

/// Limits applied when a ballot is opened.
#[derive(
    borsh::BorshDeserialize,
    borsh::BorshSerialize,
    Serialize,
    Deserialize,
    Debug,
    Clone,
    PartialEq,
    Eq,
)]
#[serde(default)]
pub struct BallotConfig {
    /// A ballot must last strictly more than this many slots.
    pub min_duration: u64,
    /// Smallest allowed candidate set.
    pub min_candidates: usize,
    /// Largest allowed candidate set.
    pub max_candidates: usize,
    /// Longest ballot or candidate name, counted in `char`s rather than bytes or
    /// UTF-16 code units. The two agree on ASCII names.
    pub max_name_len: usize,
}

impl Default for BallotConfig {
    fn default() -> Self {
        Self {
            min_duration: 10,
            min_candidates: 2,
            max_candidates: 10,
            max_name_len: 64,
        }
    }
}

impl BallotConfig {
    fn validate(&self) -> Result<()> {
        ensure!(
            self.min_candidates >= 1,
            "min_candidates must be at least 1"
        );
        ensure!(
            self.min_candidates <= self.max_candidates,
            "min_candidates {} is greater than max_candidates {}",
            self.min_candidates,
            self.max_candidates
        );
        ensure!(self.max_name_len > 0, "max_name_len must be positive");
        Ok(())
    }
}

impl<C: Context> Ballots<C> {
    pub(crate) fn init_module(
        &self,
        config: &BallotConfig,
        working_set: &mut WorkingSet<C>,
    ) -> Result<()> {
        config.validate()?;
        debug!(?config, "Initializing ballot module");

        self.config.set(config, working_set);
        self.next_ballot_id.set(&1, working_set);
        Ok(())
    }
}
