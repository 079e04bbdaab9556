use thiserror::Error;

/// Why a ballot call was rejected.
///
/// Every variant has a stable [`BallotError::id`] and [`BallotError::code`] that callers
/// can match on.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum BallotError {
    #[error("Only the owner of ballot {ballot_id} can finalize it")]
    NotAuthorized { ballot_id: u64 },

    #[error("Duration {duration} must be greater than {min_duration} and end before the maximum height")]
    InvalidExpiry { duration: u64, min_duration: u64 },

    #[error("Ballot {ballot_id} does not exist")]
    BallotNotFound { ballot_id: u64 },

    #[error("Not a candidate of ballot {ballot_id}")]
    NotACandidate { ballot_id: u64 },

    #[error("Sender already voted in ballot {ballot_id}")]
    AlreadyVoted { ballot_id: u64 },

    #[error("Ballot {ballot_id} only accepts votes in [{starts_at}, {ends_at}), current height is {height}")]
    VotingClosed {
        ballot_id: u64,
        starts_at: u64,
        ends_at: u64,
        height: u64,
    },

    #[error("Ballot {ballot_id} ends at {ends_at}, current height is {height}")]
    NotYetExpired {
        ballot_id: u64,
        ends_at: u64,
        height: u64,
    },

    #[error("Invalid candidates: {reason}")]
    InvalidCandidates { reason: String },

    #[error("Invalid ballot name: {reason}")]
    InvalidName { reason: String },
}

impl BallotError {
    /// Stable numeric code of the error.
    pub fn code(&self) -> u32 {
        match self {
            BallotError::NotAuthorized { .. } => 100,
            BallotError::InvalidExpiry { .. } => 101,
            BallotError::BallotNotFound { .. } => 102,
            BallotError::NotACandidate { .. } => 103,
            BallotError::AlreadyVoted { .. } => 104,
            BallotError::VotingClosed { .. } => 105,
            BallotError::NotYetExpired { .. } => 106,
            BallotError::InvalidCandidates { .. } => 107,
            BallotError::InvalidName { .. } => 108,
        }
    }

    /// Stable identifier of the error.
    pub fn id(&self) -> &'static str {
        match self {
            BallotError::NotAuthorized { .. } => "NotAuthorized",
            BallotError::InvalidExpiry { .. } => "InvalidExpiry",
            BallotError::BallotNotFound { .. } => "BallotNotFound",
            BallotError::NotACandidate { .. } => "NotACandidate",
            BallotError::AlreadyVoted { .. } => "AlreadyVoted",
            BallotError::VotingClosed { .. } => "VotingClosed",
            BallotError::NotYetExpired { .. } => "NotYetExpired",
            BallotError::InvalidCandidates { .. } => "InvalidCandidates",
            BallotError::InvalidName { .. } => "InvalidName",
        }
    }

    /// Finds the [`BallotError`] a failed call was rejected with, if any.
    pub fn from_module_error(err: &anyhow::Error) -> Option<&BallotError> {
        err.chain().find_map(|e| e.downcast_ref::<BallotError>())
    }
}
