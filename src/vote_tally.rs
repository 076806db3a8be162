multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::errors::ERR_ALREADY_VOTED;

// ============================================================
// Vote Scope — the three independent ballot boxes
// ============================================================

/// Identifies one ballot box of a proposal. Scopes never share voters
/// or counts, and every stage review round gets a fresh scope.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteScope {
    /// Authority pre-screen of the proposal
    Screening,
    /// Public approval vote
    Public,
    /// Authority sign-off of one stage, per review round
    Stage { index: u32, round: u32 },
}

// ============================================================
// Vote Tally — running yes/no counts
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug, Default,
)]
pub struct VoteTally {
    pub yes: u64,
    pub no: u64,
    /// Authority count frozen when the scope was opened (0 for public scopes)
    pub quorum_base: u64,
}

/// Result of evaluating the authority quorum rule against a tally.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuorumOutcome {
    Pending,
    Approved,
    Rejected,
}

impl VoteTally {
    pub fn open(quorum_base: u64) -> Self {
        VoteTally {
            yes: 0,
            no: 0,
            quorum_base,
        }
    }

    pub fn record(&mut self, support: bool) {
        if support {
            self.yes += 1;
        } else {
            self.no += 1;
        }
    }

    /// Strict majority of the frozen authority count.
    ///
    /// Approved once `yes * 2 > base`. Rejected once `no * 2 >= base`,
    /// at which point a yes-majority among the frozen set is unreachable.
    pub fn authority_outcome(&self) -> QuorumOutcome {
        if self.yes * 2 > self.quorum_base {
            QuorumOutcome::Approved
        } else if self.no * 2 >= self.quorum_base {
            QuorumOutcome::Rejected
        } else {
            QuorumOutcome::Pending
        }
    }

    /// Simple majority of cast votes; ties and zero turnout do not pass.
    pub fn public_majority(&self) -> bool {
        self.yes > self.no
    }
}

// ============================================================
// Voter sets — one per (proposal, scope)
// ============================================================

#[multiversx_sc::module]
pub trait VoteTallyModule {
    /// Marks `voter` as having voted in the scope and counts the ballot.
    /// Fails with `AlreadyVoted` on a repeat; the tally is left untouched.
    fn cast_ballot(
        &self,
        proposal_id: u64,
        scope: VoteScope,
        voter: &ManagedAddress,
        support: bool,
        tally: &mut VoteTally,
    ) {
        let is_new = self.voters(proposal_id, &scope).insert(voter.clone());
        require!(is_new, ERR_ALREADY_VOTED);
        tally.record(support);
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, scope: VoteScope, voter: ManagedAddress) -> bool {
        self.voters(proposal_id, &scope).contains(&voter)
    }

    #[view(getVoters)]
    fn get_voters(
        &self,
        proposal_id: u64,
        scope: VoteScope,
    ) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.voters(proposal_id, &scope).iter() {
            result.push(voter);
        }
        result
    }

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64, scope: &VoteScope) -> UnorderedSetMapper<ManagedAddress>;
}
