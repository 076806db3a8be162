#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod roles;
pub mod stages;
pub mod storage;
pub mod treasury;
pub mod types;
pub mod vote_tally;

use errors::*;
use types::{Proposal, ProposalState, PublicBallot, Stage, StageState};
use vote_tally::{QuorumOutcome, VoteScope, VoteTally};

// ============================================================
// Contract
// Authorities screen proposals, the public approves them, and
// funds leave the treasury one authority-approved stage at a time.
// ============================================================

#[multiversx_sc::contract]
pub trait PublicFunding:
    storage::StorageModule
    + roles::RolesModule
    + treasury::TreasuryModule
    + vote_tally::VoteTallyModule
    + stages::StagesModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the admin.
    #[init]
    fn init(
        &self,
        public_voting_period: u64,
        initial_authorities: MultiValueEncoded<ManagedAddress>,
    ) {
        require!(public_voting_period > 0, ERR_ZERO_VOTING_PERIOD);

        let caller = self.blockchain().get_caller();
        self.admin().set(&caller);
        self.public_voting_period().set(public_voting_period);
        self.proposal_count().set(0u64);
        self.treasury_balance().set(BigUint::zero());

        for authority in initial_authorities {
            if self.authorities().insert(authority.clone()) {
                self.authority_added_event(&authority);
            }
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setPublicVotingPeriod
    // Applies to proposals whose public vote opens afterwards.
    // ========================================================

    #[endpoint(setPublicVotingPeriod)]
    fn set_public_voting_period(&self, seconds: u64) {
        self.require_admin();
        require!(seconds > 0, ERR_ZERO_VOTING_PERIOD);
        self.public_voting_period().set(seconds);
        self.voting_period_changed_event(seconds);
    }

    // ========================================================
    // ENDPOINT: createProposal
    // Authorities only. Stages are created with the proposal
    // and the authority screen opens right away.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        description: ManagedBuffer,
        recipient: ManagedAddress,
        total_amount: BigUint,
        stage_amounts: MultiValueEncoded<BigUint>,
    ) -> u64 {
        let caller = self.require_authority();
        let proposal_id = self.proposal_count().get();

        let mut stage_sum = BigUint::zero();
        let mut stage_count = 0u32;
        for amount in stage_amounts {
            require!(amount > 0u64, ERR_ZERO_AMOUNT);
            stage_sum += &amount;

            let stage = Stage {
                amount,
                report: ManagedBuffer::new(),
                votes: VoteTally::default(),
                state: StageState::NotStarted,
                round: 0,
                rejected: false,
            };
            self.stages(proposal_id, stage_count).set(&stage);
            stage_count += 1;
        }
        require!(stage_count > 0, ERR_NO_STAGES);
        require!(stage_sum == total_amount, ERR_STAGE_SUM_MISMATCH);

        let timestamp = self.blockchain().get_block_timestamp();
        let mut proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            description,
            recipient,
            total_amount,
            released_amount: BigUint::zero(),
            state: ProposalState::Created,
            authority_votes: VoteTally::open(self.authority_count()),
            public_votes: VoteTally::default(),
            created_at: timestamp,
            public_voting_end_time: 0,
            current_stage: 0,
            stage_count,
        };
        self.proposal_created_event(
            proposal_id,
            &caller,
            &proposal.recipient,
            &proposal.total_amount,
        );

        proposal.state = ProposalState::UnderAuthorityVoting;
        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: authorityVoteOnProposal
    // Strict majority of the authority count frozen at creation
    // moves the proposal to PublicVoting or Rejected.
    // ========================================================

    #[endpoint(authorityVoteOnProposal)]
    fn authority_vote_on_proposal(&self, proposal_id: u64, approve: bool) {
        let caller = self.require_authority();
        let mut proposal = self.load_proposal(proposal_id);
        require!(
            proposal.state == ProposalState::UnderAuthorityVoting,
            ERR_NOT_UNDER_AUTHORITY_VOTING
        );

        self.cast_ballot(
            proposal_id,
            VoteScope::Screening,
            &caller,
            approve,
            &mut proposal.authority_votes,
        );
        self.authority_vote_event(proposal_id, &caller, approve, &proposal.authority_votes);

        match proposal.authority_votes.authority_outcome() {
            QuorumOutcome::Approved => {
                let now = self.blockchain().get_block_timestamp();
                proposal.public_voting_end_time = now + self.public_voting_period().get();
                proposal.state = ProposalState::PublicVoting;
                self.screening_passed_event(proposal_id, proposal.public_voting_end_time);
            }
            QuorumOutcome::Rejected => {
                proposal.state = ProposalState::Rejected;
                self.proposal_rejected_event(proposal_id);
            }
            QuorumOutcome::Pending => {}
        }

        self.proposals(proposal_id).set(&proposal);
    }

    // ========================================================
    // ENDPOINT: publicVoteOnProposal
    // Anyone, once. The comment is kept for audit only.
    // The end time is advisory: voting stays open until the
    // admin closes it.
    // ========================================================

    #[endpoint(publicVoteOnProposal)]
    fn public_vote_on_proposal(&self, proposal_id: u64, support: bool, comment: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.load_proposal(proposal_id);
        require!(
            proposal.state == ProposalState::PublicVoting,
            ERR_NOT_PUBLIC_VOTING
        );

        self.cast_ballot(
            proposal_id,
            VoteScope::Public,
            &caller,
            support,
            &mut proposal.public_votes,
        );

        let ballot = PublicBallot {
            voter: caller.clone(),
            support,
            comment,
            timestamp: self.blockchain().get_block_timestamp(),
        };
        self.public_ballots(proposal_id).push(&ballot);
        self.proposals(proposal_id).set(&proposal);

        self.public_vote_event(proposal_id, &caller, support, &ballot.comment);
    }

    // ========================================================
    // ENDPOINT: closePublicVoting
    // Simple majority of cast votes. Ties reject.
    // ========================================================

    #[endpoint(closePublicVoting)]
    fn close_public_voting(&self, proposal_id: u64) {
        self.require_admin();
        let mut proposal = self.load_proposal(proposal_id);
        require!(
            proposal.state == ProposalState::PublicVoting,
            ERR_NOT_PUBLIC_VOTING
        );

        let approved = proposal.public_votes.public_majority();
        proposal.state = if approved {
            ProposalState::Approved
        } else {
            ProposalState::Rejected
        };
        self.proposals(proposal_id).set(&proposal);

        self.public_voting_closed_event(proposal_id, approved, &proposal.public_votes);
        if !approved {
            self.proposal_rejected_event(proposal_id);
        }
    }

    // ========================================================
    // ENDPOINT: releaseStageAmount
    // Approved → InProgress on the first release. Afterwards a
    // release needs the previous stage Completed. Once every
    // stage is Completed, the next call completes the proposal.
    // ========================================================

    #[endpoint(releaseStageAmount)]
    fn release_stage_amount(&self, proposal_id: u64) {
        self.require_admin();
        let mut proposal = self.load_proposal(proposal_id);

        match proposal.state {
            ProposalState::Approved => {
                self.activate_current_stage(&mut proposal);
                proposal.state = ProposalState::InProgress;
            }
            ProposalState::InProgress => {
                if proposal.current_stage < proposal.stage_count {
                    self.activate_current_stage(&mut proposal);
                } else {
                    require!(
                        proposal.released_amount == proposal.total_amount,
                        ERR_STAGE_SUM_MISMATCH
                    );
                    proposal.state = ProposalState::Completed;
                    self.proposal_completed_event(proposal_id, &proposal.released_amount);
                }
            }
            _ => sc_panic!(ERR_NOT_RELEASABLE),
        }

        self.proposals(proposal_id).set(&proposal);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    /// (description, recipient, totalAmount, state, publicYes, publicNo,
    /// currentStage, totalStages, authorityYes, authorityNo, publicVotingEndTime)
    #[view(getProposalInfo)]
    fn get_proposal_info(
        &self,
        proposal_id: u64,
    ) -> MultiValue11<
        ManagedBuffer,
        ManagedAddress,
        BigUint,
        ProposalState,
        u64,
        u64,
        u32,
        u32,
        u64,
        u64,
        u64,
    > {
        let p = self.load_proposal(proposal_id);
        (
            p.description,
            p.recipient,
            p.total_amount,
            p.state,
            p.public_votes.yes,
            p.public_votes.no,
            p.current_stage,
            p.stage_count,
            p.authority_votes.yes,
            p.authority_votes.no,
            p.public_voting_end_time,
        )
            .into()
    }

    /// (amount, report, voteCount, state). `voteCount` is the approval
    /// count of the current review round.
    #[view(getStageInfo)]
    fn get_stage_info(
        &self,
        proposal_id: u64,
        stage_index: u32,
    ) -> MultiValue4<BigUint, ManagedBuffer, u64, StageState> {
        self.load_proposal(proposal_id);
        let stage = self.load_stage(proposal_id, stage_index);
        (stage.amount, stage.report, stage.votes.yes, stage.state).into()
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.load_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);

        for id in from..end {
            result.push(self.proposals(id).get());
        }
        result
    }

    #[view(getStages)]
    fn get_stages(&self, proposal_id: u64) -> MultiValueEncoded<Stage<Self::Api>> {
        let proposal = self.load_proposal(proposal_id);
        let mut result = MultiValueEncoded::new();
        for index in 0..proposal.stage_count {
            result.push(self.stages(proposal_id, index).get());
        }
        result
    }

    #[view(getPublicBallots)]
    fn get_public_ballots(&self, proposal_id: u64) -> MultiValueEncoded<PublicBallot<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for ballot in self.public_ballots(proposal_id).iter() {
            result.push(ballot);
        }
        result
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<ManagedAddress, u64, u64> {
        let admin = self.admin().get();
        let period = self.public_voting_period().get();
        (admin, period, self.authority_count()).into()
    }
}
