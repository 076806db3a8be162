multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{Proposal, StageState};
use crate::vote_tally::{QuorumOutcome, VoteScope, VoteTally};

// ============================================================
// Stage Disbursement Engine
// NotStarted → InProgress (funds leave on activation)
// InProgress → Completed (report + authority majority)
// At most one stage is InProgress at a time: the one at
// `current_stage`.
// ============================================================

#[multiversx_sc::module]
pub trait StagesModule:
    crate::storage::StorageModule
    + crate::roles::RolesModule
    + crate::treasury::TreasuryModule
    + crate::vote_tally::VoteTallyModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: submitStageReport
    // Last write wins; the identifier is stored verbatim.
    // ========================================================

    #[endpoint(submitStageReport)]
    fn submit_stage_report(&self, proposal_id: u64, stage_index: u32, report: ManagedBuffer) {
        require!(!report.is_empty(), ERR_EMPTY_REPORT);
        require!(
            !self.proposals(proposal_id).is_empty()
                && !self.stages(proposal_id, stage_index).is_empty(),
            ERR_INVALID_STAGE
        );

        let proposal = self.proposals(proposal_id).get();
        let mut stage = self.stages(proposal_id, stage_index).get();
        require!(stage.state == StageState::InProgress, ERR_INVALID_STAGE);

        let caller = self.blockchain().get_caller();
        require!(
            caller == proposal.recipient || self.authorities().contains(&caller),
            ERR_NOT_REPORTER
        );

        stage.report = report;
        self.stages(proposal_id, stage_index).set(&stage);

        self.stage_report_submitted_event(proposal_id, stage_index, &caller, &stage.report);
    }

    // ========================================================
    // ENDPOINT: voteOnStage
    // One vote per authority per review round.
    // ========================================================

    #[endpoint(voteOnStage)]
    fn vote_on_stage(&self, proposal_id: u64, stage_index: u32, approve: bool) {
        let caller = self.require_authority();
        let mut proposal = self.load_proposal(proposal_id);
        let mut stage = self.load_stage(proposal_id, stage_index);

        require!(stage.state == StageState::InProgress, ERR_STAGE_NOT_IN_PROGRESS);
        require!(!stage.rejected, ERR_STAGE_REVIEW_REJECTED);
        require!(stage.has_report(), ERR_REPORT_MISSING);

        let scope = VoteScope::Stage {
            index: stage_index,
            round: stage.round,
        };
        self.cast_ballot(proposal_id, scope, &caller, approve, &mut stage.votes);
        self.stage_vote_event(proposal_id, stage_index, &caller, approve, &stage.votes);

        match stage.votes.authority_outcome() {
            QuorumOutcome::Approved => {
                stage.state = StageState::Completed;
                proposal.current_stage += 1;
                self.proposals(proposal_id).set(&proposal);
                self.stage_completed_event(proposal_id, stage_index);
            }
            QuorumOutcome::Rejected => {
                stage.rejected = true;
                self.stage_rejected_event(proposal_id, stage_index, stage.round);
            }
            QuorumOutcome::Pending => {}
        }

        self.stages(proposal_id, stage_index).set(&stage);
    }

    // ========================================================
    // ENDPOINT: reopenStageReview
    // Admin intervention after authorities voted a stage down.
    // Opens a fresh round: new voter set, new frozen quorum base.
    // ========================================================

    #[endpoint(reopenStageReview)]
    fn reopen_stage_review(&self, proposal_id: u64, stage_index: u32) {
        self.require_admin();
        self.load_proposal(proposal_id);
        let mut stage = self.load_stage(proposal_id, stage_index);

        require!(stage.state == StageState::InProgress, ERR_STAGE_NOT_IN_PROGRESS);
        require!(stage.rejected, ERR_STAGE_REVIEW_NOT_REJECTED);

        stage.round += 1;
        stage.rejected = false;
        stage.votes = VoteTally::open(self.authority_count());
        self.stages(proposal_id, stage_index).set(&stage);

        self.stage_review_reopened_event(proposal_id, stage_index, stage.round);
    }

    // ========================================================
    // INTERNAL: activate the stage at `current_stage`
    // Every guard runs before the payout, and a failed payout
    // reverts the whole call, so a stage is never marked
    // InProgress without its funds having moved.
    // ========================================================

    fn activate_current_stage(&self, proposal: &mut Proposal<Self::Api>) {
        let stage_index = proposal.current_stage;
        let mut stage = self.load_stage(proposal.id, stage_index);
        require!(stage.state == StageState::NotStarted, ERR_STAGE_NOT_COMPLETED);

        if stage_index > 0 {
            let previous = self.load_stage(proposal.id, stage_index - 1);
            require!(previous.state == StageState::Completed, ERR_STAGE_NOT_COMPLETED);
        }

        let released = &proposal.released_amount + &stage.amount;
        require!(released <= proposal.total_amount, ERR_OVER_RELEASE);

        self.release_funds(&stage.amount, &proposal.recipient);

        stage.state = StageState::InProgress;
        stage.votes = VoteTally::open(self.authority_count());
        self.stages(proposal.id, stage_index).set(&stage);
        proposal.released_amount = released;

        self.stage_activated_event(proposal.id, stage_index, &stage.amount);
    }
}
