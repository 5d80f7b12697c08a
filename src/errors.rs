pub const ERR_INVALID_PROPOSAL: &str = "Invalid proposal";
pub const ERR_NOT_ACTIVE_PROPOSAL_TIME: &str = "Voting period has ended";
pub const ERR_STILL_ACTIVE_PROPOSAL_TIME: &str = "Voting period has not ended";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_ZERO_BALANCE: &str = "No voting power";
pub const ERR_ACTIVE_BALANCE: &str = "Balance is frozen by an active vote";
pub const ERR_INVALID_AMOUNT: &str = "Invalid amount";
pub const ERR_ACCESS_DENIED: &str = "Access denied";
pub const ERR_TRANSFER_FAILED: &str = "Token transfer failed";

pub const ERR_INVALID_TOKEN: &str = "Invalid governance token";
pub const ERR_INVALID_DEBATING_PERIOD: &str = "Debating period must be positive";
pub const ERR_FINISH_DATE_OVERFLOW: &str = "Debating period overflows the finish date";
