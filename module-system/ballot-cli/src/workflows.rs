//! The commands of the CLI.

use ballot::{Ballots, CallMessage, CandidateEntry};
use ballot_modules_api::utils::generate_address;
use ballot_modules_api::{dispatch_call, Address, Context, MemoryStorage, StateCheckpoint, WorkingSet};
use serde::Serialize;

use crate::Ctx;

/// Who sends a call, and at which height it runs.
#[derive(Debug, Clone, clap::Args)]
pub struct CallArgs {
    /// Address of the sender
    #[clap(long)]
    pub sender: Address,
    /// Current slot height
    #[clap(long)]
    pub height: u64,
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum Workflow {
    /// Open a new ballot owned by the sender
    Open {
        #[clap(flatten)]
        call: CallArgs,
        /// Name of the ballot
        #[clap(long)]
        name: String,
        /// Number of slots the ballot accepts votes for
        #[clap(long)]
        duration: u64,
        /// A candidate, as `<name>=<address>`. Repeat for every candidate.
        #[clap(long = "candidate", value_parser = parse_candidate, required = true)]
        candidates: Vec<CandidateEntry<Ctx>>,
    },
    /// Vote for a candidate
    Vote {
        #[clap(flatten)]
        call: CallArgs,
        #[clap(long = "ballot")]
        ballot_id: u64,
        /// Address of the candidate
        #[clap(long)]
        candidate: Address,
    },
    /// Mark an expired ballot as ended
    Finalize {
        #[clap(flatten)]
        call: CallArgs,
        #[clap(long = "ballot")]
        ballot_id: u64,
    },
    /// Show a ballot
    VoteInfo {
        #[clap(long = "ballot")]
        ballot_id: u64,
    },
    /// Show a candidate of a ballot
    CandidateInfo {
        #[clap(long = "ballot")]
        ballot_id: u64,
        #[clap(long)]
        candidate: Address,
    },
    /// Show how an address voted in a ballot
    VoterInfo {
        #[clap(long = "ballot")]
        ballot_id: u64,
        #[clap(long)]
        voter: Address,
    },
    /// Show the tally of every candidate of a ballot
    Results {
        #[clap(long = "ballot")]
        ballot_id: u64,
    },
    /// Print the address derived from a seed
    Address { seed: String },
}

/// What a command prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub text: String,
    /// `false` if the call was reverted.
    pub success: bool,
    /// Whether the storage may have changed and has to be saved.
    pub modified: bool,
}

impl Output {
    fn read<T: Serialize>(value: &T) -> anyhow::Result<Self> {
        Ok(Self {
            text: serde_json::to_string_pretty(value)?,
            success: true,
            modified: false,
        })
    }
}

impl Workflow {
    /// Runs the command against `storage`. Calls are committed to it, whatever their outcome.
    pub fn run(self, storage: &MemoryStorage) -> anyhow::Result<Output> {
        let module = Ballots::<Ctx>::default();

        let (call, message) = match self {
            Workflow::Open {
                call,
                name,
                duration,
                candidates,
            } => (
                call,
                CallMessage::Open {
                    name,
                    duration,
                    candidates,
                },
            ),
            Workflow::Vote {
                call,
                ballot_id,
                candidate,
            } => (
                call,
                CallMessage::CastVote {
                    ballot_id,
                    candidate,
                },
            ),
            Workflow::Finalize { call, ballot_id } => (call, CallMessage::Finalize { ballot_id }),
            Workflow::VoteInfo { ballot_id } => {
                let mut working_set = WorkingSet::<Ctx>::new(storage.clone());
                return Output::read(&module.vote_info(ballot_id, &mut working_set));
            }
            Workflow::CandidateInfo {
                ballot_id,
                candidate,
            } => {
                let mut working_set = WorkingSet::<Ctx>::new(storage.clone());
                return Output::read(&module.candidate_info(ballot_id, &candidate, &mut working_set));
            }
            Workflow::VoterInfo { ballot_id, voter } => {
                let mut working_set = WorkingSet::<Ctx>::new(storage.clone());
                return Output::read(&module.voter_info(ballot_id, &voter, &mut working_set));
            }
            Workflow::Results { ballot_id } => {
                let mut working_set = WorkingSet::<Ctx>::new(storage.clone());
                return Output::read(&module.results(ballot_id, &mut working_set));
            }
            Workflow::Address { seed } => {
                return Ok(Output {
                    text: generate_address::<Ctx>(&seed).to_string(),
                    success: true,
                    modified: false,
                });
            }
        };

        let context = Ctx::new(call.sender, call.height);
        let checkpoint = StateCheckpoint::<Ctx>::new(storage.clone());
        let (receipt, checkpoint) = dispatch_call(&module, message, &context, checkpoint);
        checkpoint.commit()?;

        Ok(Output {
            text: serde_json::to_string_pretty(&receipt)?,
            success: receipt.is_successful(),
            modified: true,
        })
    }
}

/// Parses a `<name>=<address>` candidate.
pub fn parse_candidate(arg: &str) -> Result<CandidateEntry<Ctx>, String> {
    let (name, identity) = arg
        .rsplit_once('=')
        .ok_or_else(|| format!("Expected <name>=<address>, got {arg}"))?;
    let identity = identity.parse::<Address>().map_err(|e| e.to_string())?;

    Ok(CandidateEntry {
        name: name.to_owned(),
        identity,
    })
}
