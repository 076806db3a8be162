multiversx_sc::imports!();

use crate::errors::{ERR_PROPOSAL_NOT_FOUND, ERR_STAGE_NOT_FOUND};
use crate::types::{Proposal, PublicBallot, Stage};

#[multiversx_sc::module]
pub trait StorageModule {
    fn load_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let mapper = self.proposals(proposal_id);
        require!(!mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        mapper.get()
    }

    fn load_stage(&self, proposal_id: u64, stage_index: u32) -> Stage<Self::Api> {
        let mapper = self.stages(proposal_id, stage_index);
        require!(!mapper.is_empty(), ERR_STAGE_NOT_FOUND);
        mapper.get()
    }

    // ── Configuration ──

    #[storage_mapper("publicVotingPeriod")]
    fn public_voting_period(&self) -> SingleValueMapper<u64>;

    // ── Proposals ──

    #[view(proposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("stages")]
    fn stages(&self, proposal_id: u64, stage_index: u32) -> SingleValueMapper<Stage<Self::Api>>;

    #[storage_mapper("publicBallots")]
    fn public_ballots(&self, proposal_id: u64) -> VecMapper<PublicBallot<Self::Api>>;
}
