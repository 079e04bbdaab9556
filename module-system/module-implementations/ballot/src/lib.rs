#![doc = include_str!("../README.md")]

pub mod call;
mod engine;
mod error;
mod event;
pub mod genesis;
pub mod query;
mod registry;
mod types;

use ballot_modules_api::{
    CallResponse, Context, ErrorCode, Module, ModuleError, Prefix, WorkingSet,
};
use ballot_state::{StateMap, StateValue};
pub use call::{CallMessage, CandidateEntry};
pub use error::BallotError;
pub use event::{BallotFinalized, BallotOpened, VoteCast};
pub use genesis::BallotConfig;
pub use query::{CandidateInfo, CandidateResult, VoteInfo};
pub use types::{Ballot, BallotStatus, Candidate, VoterRecord};

/// The ballot module. Holds every ballot, their candidates and who voted in them.
#[derive(Clone, Debug)]
pub struct Ballots<C: Context> {
    /// The id the next opened ballot gets. Starts at 1.
    pub(crate) next_ballot_id: StateValue<u64>,

    pub(crate) ballots: StateMap<u64, Ballot<C>>,

    /// Keyed by (ballot id, candidate identity).
    pub(crate) candidates: StateMap<(u64, C::Address), Candidate>,

    /// Candidate identities of each ballot, in the order they were given at open.
    pub(crate) candidate_order: StateMap<u64, Vec<C::Address>>,

    /// Keyed by (ballot id, voter identity). Presence means the voter already voted.
    pub(crate) voters: StateMap<(u64, C::Address), VoterRecord<C>>,

    pub(crate) config: StateValue<BallotConfig>,
}

impl<C: Context> Default for Ballots<C> {
    fn default() -> Self {
        Self {
            next_ballot_id: StateValue::new(prefix("next_ballot_id")),
            ballots: StateMap::new(prefix("ballots")),
            candidates: StateMap::new(prefix("candidates")),
            candidate_order: StateMap::new(prefix("candidate_order")),
            voters: StateMap::new(prefix("voters")),
            config: StateValue::new(prefix("config")),
        }
    }
}

const MODULE_PREFIX: &[u8] = b"ballot/";

fn prefix(container: &str) -> Prefix {
    Prefix::new(MODULE_PREFIX.to_vec()).extended(format!("{container}/").as_bytes())
}

impl<C: Context> Module for Ballots<C> {
    type Context = C;

    type Config = BallotConfig;

    type CallMessage = call::CallMessage<C>;

    fn genesis(
        &self,
        config: &Self::Config,
        working_set: &mut WorkingSet<C>,
    ) -> Result<(), ModuleError> {
        Ok(self.init_module(config, working_set)?)
    }

    fn call(
        &self,
        msg: Self::CallMessage,
        context: &Self::Context,
        working_set: &mut WorkingSet<C>,
    ) -> Result<CallResponse, ModuleError> {
        match msg {
            call::CallMessage::Open {
                name,
                duration,
                candidates,
            } => {
                self.open(name, duration, candidates, context, working_set)?;
                Ok(CallResponse::default())
            }

            call::CallMessage::CastVote {
                ballot_id,
                candidate,
            } => Ok(self.cast_vote(ballot_id, candidate, context, working_set)?),

            call::CallMessage::Finalize { ballot_id } => {
                Ok(self.finalize(ballot_id, context, working_set)?)
            }
        }
    }

    fn error_code(&self, error: &ModuleError) -> Option<ErrorCode> {
        let ModuleError::ModuleError(err) = error;
        BallotError::from_module_error(err).map(|e| ErrorCode {
            id: e.id().to_owned(),
            code: e.code(),
        })
    }
}
