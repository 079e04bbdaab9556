use ballot_modules_api::Context;

/// A candidate as given when a ballot is opened.
#[derive(
    borsh::BorshDeserialize,
    borsh::BorshSerialize,
    serde::Serialize,
    serde::Deserialize,
    Debug,
    PartialEq,
    Eq,
    Clone,
)]
pub struct CandidateEntry<C: Context> {
    /// Display name, at most `max_name_len` chars.
    pub name: String,
    /// The identity votes are cast for. Unique within a ballot.
    pub identity: C::Address,
}

/// Call actions supported by the module.
#[derive(
    borsh::BorshDeserialize,
    borsh::BorshSerialize,
    serde::Serialize,
    serde::Deserialize,
    Debug,
    PartialEq,
    Eq,
    Clone,
)]
pub enum CallMessage<C: Context> {
    /// Opens a new ballot owned by the sender, starting at the current height.
    Open {
        /// Name of the ballot.
        name: String,
        /// Number of slots the ballot accepts votes for.
        duration: u64,
        /// The fixed candidate set.
        candidates: Vec<CandidateEntry<C>>,
    },
    /// Votes for `candidate` in the ballot `ballot_id`.
    CastVote {
        /// The ballot to vote in.
        ballot_id: u64,
        /// Identity of the chosen candidate.
        candidate: C::Address,
    },
    /// Marks an expired ballot as ended. Owner only.
    Finalize {
        /// The ballot to finalize.
        ballot_id: u64,
    },
}
