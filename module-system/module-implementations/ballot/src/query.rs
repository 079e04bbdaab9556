//! Read-only views of the module state. None of them fail: an unknown ballot,
//! candidate or voter is reported as `None`.

use ballot_modules_api::{Context, WorkingSet};
use serde::{Deserialize, Serialize};

use crate::{BallotStatus, Ballots, VoterRecord};

/// Public fields of a ballot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteInfo<C: Context> {
    pub name: String,
    pub owner: C::Address,
    pub starts_at: u64,
    pub ends_at: u64,
    pub status: BallotStatus,
    pub total_votes: u64,
}

/// A candidate's name and tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateInfo {
    pub name: String,
    pub votes: u64,
}

/// One row of [`Ballots::results`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateResult<C: Context> {
    pub identity: C::Address,
    pub name: String,
    pub votes: u64,
}

impl<C: Context> Ballots<C> {
    pub fn vote_info(&self, ballot_id: u64, working_set: &mut WorkingSet<C>) -> Option<VoteInfo<C>> {
        self.ballots.get(&ballot_id, working_set).map(|ballot| VoteInfo {
            name: ballot.name,
            owner: ballot.owner,
            starts_at: ballot.starts_at,
            ends_at: ballot.ends_at,
            status: ballot.status,
            total_votes: ballot.total_votes,
        })
    }

    pub fn candidate_info(
        &self,
        ballot_id: u64,
        candidate: &C::Address,
        working_set: &mut WorkingSet<C>,
    ) -> Option<CandidateInfo> {
        self.candidates
            .get(&(ballot_id, candidate.clone()), working_set)
            .map(|candidate| CandidateInfo {
                name: candidate.name,
                votes: candidate.votes,
            })
    }

    /// Returns how `voter` voted in the ballot, if they did.
    pub fn voter_info(
        &self,
        ballot_id: u64,
        voter: &C::Address,
        working_set: &mut WorkingSet<C>,
    ) -> Option<VoterRecord<C>> {
        self.voters.get(&(ballot_id, voter.clone()), working_set)
    }

    /// Returns every candidate of the ballot with its tally, in the order they were
    /// given when the ballot was opened.
    pub fn results(
        &self,
        ballot_id: u64,
        working_set: &mut WorkingSet<C>,
    ) -> Option<Vec<CandidateResult<C>>> {
        let order = self.candidate_order.get(&ballot_id, working_set)?;
        let results = order
            .into_iter()
            .filter_map(|identity| {
                let candidate = self
                    .candidates
                    .get(&(ballot_id, identity.clone()), working_set)?;
                Some(CandidateResult {
                    identity,
                    name: candidate.name,
                    votes: candidate.votes,
                })
            })
            .collect();

        Some(results)
    }

    /// The limits new ballots are checked against.
    pub fn config(&self, working_set: &mut WorkingSet<C>) -> Option<crate::BallotConfig> {
        self.config.get(working_set)
    }
}
