multiversx_sc::imports!();

use crate::vote_tally::VoteTally;

/// Every state change is logged here. Indexers follow these events
/// instead of polling the views.
#[multiversx_sc::module]
pub trait EventsModule {
    // ── Roles ──

    #[event("authorityAdded")]
    fn authority_added_event(&self, #[indexed] authority: &ManagedAddress);

    #[event("authorityRemoved")]
    fn authority_removed_event(&self, #[indexed] authority: &ManagedAddress);

    #[event("adminTransferred")]
    fn admin_transferred_event(
        &self,
        #[indexed] previous_admin: &ManagedAddress,
        #[indexed] new_admin: &ManagedAddress,
    );

    // ── Treasury ──

    #[event("fundsDeposited")]
    fn funds_deposited_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_balance: &BigUint,
    );

    #[event("fundsWithdrawn")]
    fn funds_withdrawn_event(
        &self,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_balance: &BigUint,
    );

    #[event("fundsReleased")]
    fn funds_released_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_balance: &BigUint,
    );

    // ── Proposals ──

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        total_amount: &BigUint,
    );

    #[event("authorityVote")]
    fn authority_vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] authority: &ManagedAddress,
        #[indexed] support: bool,
        tally: &VoteTally,
    );

    #[event("screeningPassed")]
    fn screening_passed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] public_voting_end_time: u64,
    );

    #[event("proposalRejected")]
    fn proposal_rejected_event(&self, #[indexed] proposal_id: u64);

    #[event("publicVote")]
    fn public_vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        comment: &ManagedBuffer,
    );

    #[event("publicVotingClosed")]
    fn public_voting_closed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] approved: bool,
        tally: &VoteTally,
    );

    #[event("proposalCompleted")]
    fn proposal_completed_event(
        &self,
        #[indexed] proposal_id: u64,
        released_amount: &BigUint,
    );

    // ── Stages ──

    #[event("stageActivated")]
    fn stage_activated_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] stage_index: u32,
        amount: &BigUint,
    );

    #[event("stageReportSubmitted")]
    fn stage_report_submitted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] stage_index: u32,
        #[indexed] submitter: &ManagedAddress,
        report: &ManagedBuffer,
    );

    #[event("stageVote")]
    fn stage_vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] stage_index: u32,
        #[indexed] authority: &ManagedAddress,
        #[indexed] approve: bool,
        tally: &VoteTally,
    );

    #[event("stageCompleted")]
    fn stage_completed_event(&self, #[indexed] proposal_id: u64, #[indexed] stage_index: u32);

    #[event("stageRejected")]
    fn stage_rejected_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] stage_index: u32,
        #[indexed] round: u32,
    );

    #[event("stageReviewReopened")]
    fn stage_review_reopened_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] stage_index: u32,
        #[indexed] round: u32,
    );

    // ── Config ──

    #[event("votingPeriodChanged")]
    fn voting_period_changed_event(&self, #[indexed] seconds: u64);
}
