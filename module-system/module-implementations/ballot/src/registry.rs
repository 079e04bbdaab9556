use std::collections::BTreeSet;

use anyhow::{anyhow, ensure, Result};
use ballot_modules_api::{Context, WorkingSet};
use tracing::info;

use crate::event::{self, BallotOpened};
use crate::{Ballot, BallotConfig, BallotError, BallotStatus, Ballots, Candidate, CandidateEntry};

impl<C: Context> Ballots<C> {
    /// Opens a new ballot owned by the sender and returns its id.
    ///
    /// All the checks run before anything is written. [`ballot_modules_api::Module::call`] answers
    /// with an empty [`ballot_modules_api::CallResponse`], so callers learn the id from
    /// the `ballot_opened` event.
    pub(crate) fn open(
        &self,
        name: String,
        duration: u64,
        candidates: Vec<CandidateEntry<C>>,
        context: &C,
        working_set: &mut WorkingSet<C>,
    ) -> Result<u64> {
        let config = self.config.get_or_err(working_set)?;
        let starts_at = context.slot_height();

        let ends_at = Self::check_expiry(starts_at, duration, &config)?;
        Self::check_candidates(&candidates, &config)?;
        Self::check_name(&name, &config)?;

        let ballot_id = self.next_ballot_id.get_or_err(working_set)?;
        let next_ballot_id = ballot_id
            .checked_add(1)
            .ok_or(anyhow!("Ballot id overflow"))?;

        let owner = context.sender().clone();
        let ballot = Ballot::<C> {
            name,
            owner: owner.clone(),
            starts_at,
            ends_at,
            status: BallotStatus::Active,
            total_votes: 0,
        };

        let mut order = Vec::with_capacity(candidates.len());
        for entry in candidates {
            self.candidates.set(
                &(ballot_id, entry.identity.clone()),
                &Candidate::new(entry.name),
                working_set,
            );
            order.push(entry.identity);
        }

        self.candidate_order.set(&ballot_id, &order, working_set);
        self.ballots.set(&ballot_id, &ballot, working_set);
        self.next_ballot_id.set(&next_ballot_id, working_set);

        info!(
            ballot_id,
            %owner,
            starts_at,
            ends_at,
            candidates = order.len(),
            "Ballot opened"
        );
        event::emit(
            event::BALLOT_OPENED,
            &BallotOpened {
                ballot_id,
                owner: owner.to_string(),
                starts_at,
                ends_at,
            },
            working_set,
        )?;

        Ok(ballot_id)
    }

    fn check_expiry(starts_at: u64, duration: u64, config: &BallotConfig) -> Result<u64> {
        let invalid = || BallotError::InvalidExpiry {
            duration,
            min_duration: config.min_duration,
        };

        ensure!(duration > config.min_duration, invalid());
        starts_at
            .checked_add(duration)
            .ok_or_else(|| invalid().into())
    }

    fn check_candidates(candidates: &[CandidateEntry<C>], config: &BallotConfig) -> Result<()> {
        let count = candidates.len();
        ensure!(
            (config.min_candidates..=config.max_candidates).contains(&count),
            BallotError::InvalidCandidates {
                reason: format!(
                    "expected between {} and {} candidates, got {}",
                    config.min_candidates, config.max_candidates, count
                ),
            }
        );

        let mut seen = BTreeSet::new();
        for entry in candidates {
            ensure!(
                seen.insert(&entry.identity),
                BallotError::InvalidCandidates {
                    reason: format!("{} is listed more than once", entry.identity),
                }
            );

            if let Err(reason) = check_text(&entry.name, config.max_name_len) {
                return Err(BallotError::InvalidCandidates {
                    reason: format!("candidate {}: {}", entry.identity, reason),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Only the length of a ballot name is bounded, an empty name is accepted.
    fn check_name(name: &str, config: &BallotConfig) -> Result<()> {
        check_len(name, config.max_name_len)
            .map_err(|reason| BallotError::InvalidName { reason }.into())
    }
}

fn check_text(text: &str, max_len: usize) -> std::result::Result<(), String> {
    if text.trim().is_empty() {
        return Err("name is empty".to_owned());
    }
    check_len(text, max_len)
}

fn check_len(text: &str, max_len: usize) -> std::result::Result<(), String> {
    let len = text.chars().count();
    if len > max_len {
        return Err(format!("name is {len} chars long, the limit is {max_len}"));
    }
    Ok(())
}
