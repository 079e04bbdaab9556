use ballot_modules_api::Context;

/// Lifecycle of a ballot.
#[derive(
    borsh::BorshDeserialize,
    borsh::BorshSerialize,
    serde::Serialize,
    serde::Deserialize,
    Debug,
    PartialEq,
    Eq,
    Clone,
    Copy,
)]
pub enum BallotStatus {
    /// Set at open.
    Active,
    /// Set by finalize. Terminal.
    Ended,
}

/// A stored ballot.
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
pub struct Ballot<C: Context> {
    pub name: String,
    pub owner: C::Address,
    pub starts_at: u64,
    /// Always greater than `starts_at`.
    pub ends_at: u64,
    pub status: BallotStatus,
    pub total_votes: u64,
}

impl<C: Context> Ballot<C> {
    /// Whether a vote at `height` falls inside `[starts_at, ends_at)`.
    /// The stored status plays no part in this.
    pub fn is_open_at(&self, height: u64) -> bool {
        self.starts_at <= height && height < self.ends_at
    }

    pub fn has_expired_at(&self, height: u64) -> bool {
        height >= self.ends_at
    }
}

/// A stored candidate of a ballot.
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
pub struct Candidate {
    pub name: String,
    pub votes: u64,
}

impl Candidate {
    pub fn new(name: String) -> Self {
        Self { name, votes: 0 }
    }
}

/// Written when a voter's vote is accepted. Never removed.
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
pub struct VoterRecord<C: Context> {
    /// The candidate the vote went to.
    pub candidate: C::Address,
    /// Height the vote was cast at.
    pub height: u64,
}
