// Every message starts with its failure kind so callers can classify
// a reverted transaction from the returned message alone.

// ── Unauthorized ──
pub const ERR_NOT_ADMIN: &str = "Unauthorized: caller is not the admin";
pub const ERR_NOT_AUTHORITY: &str = "Unauthorized: caller is not an authority";
pub const ERR_NOT_REPORTER: &str =
    "Unauthorized: only the recipient or an authority can submit reports";

// ── InvalidState ──
pub const ERR_NOT_UNDER_AUTHORITY_VOTING: &str =
    "InvalidState: proposal is not under authority voting";
pub const ERR_NOT_PUBLIC_VOTING: &str = "InvalidState: proposal is not in public voting";
pub const ERR_NOT_RELEASABLE: &str = "InvalidState: proposal is not approved or in progress";
pub const ERR_STAGE_NOT_COMPLETED: &str = "InvalidState: current stage is not completed";
pub const ERR_STAGE_NOT_IN_PROGRESS: &str = "InvalidState: stage is not in progress";
pub const ERR_STAGE_REVIEW_REJECTED: &str = "InvalidState: stage review was rejected";
pub const ERR_STAGE_REVIEW_NOT_REJECTED: &str = "InvalidState: stage review was not rejected";
pub const ERR_REPORT_MISSING: &str = "InvalidState: stage report has not been submitted";

// ── InvalidStage ──
pub const ERR_INVALID_STAGE: &str = "InvalidStage: stage does not exist or is not in progress";

// ── AlreadyVoted ──
pub const ERR_ALREADY_VOTED: &str = "AlreadyVoted: caller already voted in this scope";

// ── InsufficientFunds ──
pub const ERR_INSUFFICIENT_FUNDS: &str = "InsufficientFunds: treasury balance too low";

// ── NotFound ──
pub const ERR_PROPOSAL_NOT_FOUND: &str = "NotFound: proposal does not exist";
pub const ERR_STAGE_NOT_FOUND: &str = "NotFound: stage does not exist";

// ── InvariantViolation ──
pub const ERR_STAGE_SUM_MISMATCH: &str =
    "InvariantViolation: total amount must equal the sum of stage amounts";
pub const ERR_OVER_RELEASE: &str = "InvariantViolation: release would exceed the proposal total";

// ── InvalidInput ──
pub const ERR_NO_STAGES: &str = "InvalidInput: at least one stage is required";
pub const ERR_ZERO_AMOUNT: &str = "InvalidInput: amount must be greater than zero";
pub const ERR_EMPTY_REPORT: &str = "InvalidInput: report identifier is empty";
pub const ERR_ZERO_VOTING_PERIOD: &str = "InvalidInput: voting period must be greater than zero";
