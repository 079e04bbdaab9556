//! Payloads of the events emitted by the module. Each event value is the JSON form
//! of one of these.

use ballot_state::{Storage, WorkingSet};
use serde::{Deserialize, Serialize};

pub(crate) const BALLOT_OPENED: &str = "ballot_opened";
pub(crate) const VOTE_CAST: &str = "vote_cast";
pub(crate) const BALLOT_FINALIZED: &str = "ballot_finalized";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotOpened {
    pub ballot_id: u64,
    pub owner: String,
    pub starts_at: u64,
    pub ends_at: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCast {
    pub ballot_id: u64,
    pub voter: String,
    pub candidate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotFinalized {
    pub ballot_id: u64,
    pub total_votes: u64,
}

pub(crate) fn emit<S: Storage, T: Serialize>(
    key: &str,
    payload: &T,
    working_set: &mut WorkingSet<S>,
) -> anyhow::Result<()> {
    let value = serde_json::to_string(payload)?;
    working_set.add_event(key, &value);
    Ok(())
}
