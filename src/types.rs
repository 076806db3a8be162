multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::vote_tally::VoteTally;

// ============================================================
// Proposal State — lifecycle states
// ============================================================

/// Discriminant order is part of the ABI and must not change.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalState {
    /// Recorded, screening not yet opened. Never observed at rest:
    /// creation opens the authority screen in the same transaction.
    Created,
    /// Authorities vote yes/no. Strict majority decides.
    UnderAuthorityVoting,
    /// Anyone may vote once. Closed explicitly by the admin.
    PublicVoting,
    /// Public majority reached. Waiting for the first release.
    Approved,
    /// Screen or public vote failed. Terminal state.
    Rejected,
    /// At least one stage released.
    InProgress,
    /// Every stage completed. Terminal state.
    Completed,
}

// ============================================================
// Stage State — per-milestone sub-machine
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum StageState {
    NotStarted,
    /// Funds sent to the recipient, waiting on report + authority sign-off.
    InProgress,
    Completed,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub recipient: ManagedAddress<M>,
    /// Always equal to the sum of the stage amounts
    pub total_amount: BigUint<M>,
    /// Sum of the amounts of every activated stage
    pub released_amount: BigUint<M>,
    pub state: ProposalState,
    pub authority_votes: VoteTally,
    pub public_votes: VoteTally,
    pub created_at: u64,
    /// Advisory deadline, 0 until public voting opens
    pub public_voting_end_time: u64,
    /// Index of the next stage to be acted upon
    pub current_stage: u32,
    pub stage_count: u32,
}

// ============================================================
// Stage — a funding milestone
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Stage<M: ManagedTypeApi> {
    pub amount: BigUint<M>,
    /// Opaque content identifier of the report, empty until submitted
    pub report: ManagedBuffer<M>,
    pub votes: VoteTally,
    pub state: StageState,
    /// Review round, bumped every time the admin reopens a rejected review
    pub round: u32,
    /// Authorities voted the current round down; blocks further progress
    pub rejected: bool,
}

impl<M: ManagedTypeApi> Stage<M> {
    pub fn has_report(&self) -> bool {
        !self.report.is_empty()
    }
}

// ============================================================
// Public Ballot — audit trail for public votes
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct PublicBallot<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub support: bool,
    pub comment: ManagedBuffer<M>,
    pub timestamp: u64,
}
