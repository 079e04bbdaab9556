use anyhow::{anyhow, bail, ensure, Result};
use ballot_modules_api::{CallResponse, Context, WorkingSet};
use tracing::{debug, info};

use crate::event::{self, BallotFinalized, VoteCast};
use crate::{Ballot, BallotError, BallotStatus, Ballots, VoterRecord};

impl<C: Context> Ballots<C> {
    /// Records the sender's vote for `candidate`.
    ///
    /// The checks run in a fixed order: the ballot exists, the current height is inside
    /// the voting window, the candidate belongs to the ballot, the sender hasn't voted yet.
    pub(crate) fn cast_vote(
        &self,
        ballot_id: u64,
        candidate: C::Address,
        context: &C,
        working_set: &mut WorkingSet<C>,
    ) -> Result<CallResponse> {
        let height = context.slot_height();
        let mut ballot = self.get_ballot(ballot_id, working_set)?;

        // The stored status is not consulted: an expired ballot is closed whether it was
        // finalized or not.
        ensure!(
            ballot.is_open_at(height),
            BallotError::VotingClosed {
                ballot_id,
                starts_at: ballot.starts_at,
                ends_at: ballot.ends_at,
                height,
            }
        );

        let candidate_key = (ballot_id, candidate.clone());
        let mut record = self
            .candidates
            .get(&candidate_key, working_set)
            .ok_or(BallotError::NotACandidate { ballot_id })?;

        let voter = context.sender();
        let voter_key = (ballot_id, voter.clone());
        if self.voters.get(&voter_key, working_set).is_some() {
            bail!(BallotError::AlreadyVoted { ballot_id });
        }

        record.votes = record
            .votes
            .checked_add(1)
            .ok_or(anyhow!("Vote count overflow"))?;
        ballot.total_votes = ballot
            .total_votes
            .checked_add(1)
            .ok_or(anyhow!("Vote count overflow"))?;

        self.candidates.set(&candidate_key, &record, working_set);
        self.ballots.set(&ballot_id, &ballot, working_set);
        self.voters.set(
            &voter_key,
            &VoterRecord::<C> {
                candidate: candidate.clone(),
                height,
            },
            working_set,
        );

        debug!(ballot_id, %voter, %candidate, height, "Vote accepted");
        event::emit(
            event::VOTE_CAST,
            &VoteCast {
                ballot_id,
                voter: voter.to_string(),
                candidate: candidate.to_string(),
            },
            working_set,
        )?;

        Ok(CallResponse::default())
    }

    /// Marks the ballot as ended. Only the owner can do it, and only once the window
    /// has elapsed. Finalizing an ended ballot again is accepted and changes nothing.
    pub(crate) fn finalize(
        &self,
        ballot_id: u64,
        context: &C,
        working_set: &mut WorkingSet<C>,
    ) -> Result<CallResponse> {
        let height = context.slot_height();
        let mut ballot = self.get_ballot(ballot_id, working_set)?;

        ensure!(
            &ballot.owner == context.sender(),
            BallotError::NotAuthorized { ballot_id }
        );
        ensure!(
            ballot.has_expired_at(height),
            BallotError::NotYetExpired {
                ballot_id,
                ends_at: ballot.ends_at,
                height,
            }
        );

        if ballot.status == BallotStatus::Ended {
            debug!(ballot_id, "Ballot is already ended");
            return Ok(CallResponse::default());
        }

        ballot.status = BallotStatus::Ended;
        self.ballots.set(&ballot_id, &ballot, working_set);

        info!(
            ballot_id,
            total_votes = ballot.total_votes,
            height,
            "Ballot finalized"
        );
        event::emit(
            event::BALLOT_FINALIZED,
            &BallotFinalized {
                ballot_id,
                total_votes: ballot.total_votes,
            },
            working_set,
        )?;

        Ok(CallResponse::default())
    }

    fn get_ballot(&self, ballot_id: u64, working_set: &mut WorkingSet<C>) -> Result<Ballot<C>> {
        Ok(self
            .ballots
            .get(&ballot_id, working_set)
            .ok_or(BallotError::BallotNotFound { ballot_id })?)
    }
}
