pub const ERR_INVALID_SCORE: &str = "Score must be between 1 and 5";
pub const ERR_UNAUTHORIZED: &str = "Only admin can call this function";
pub const ERR_NO_HISTORY: &str = "No feedback found for this user";
pub const ERR_NO_FUNDS_ATTACHED: &str = "No EGLD sent";
pub const ERR_FEEDBACK_INDEX_OUT_OF_RANGE: &str = "Feedback index out of range";

pub const ERR_INVALID_REWARD_TOKEN: &str = "Invalid reward token";
pub const ERR_WRONG_DEPOSIT_TOKEN: &str = "Only the reward token can be deposited";
pub const ERR_EMPTY_DEPOSIT: &str = "Deposit amount must be positive";
pub const ERR_ZERO_REWARD: &str = "Reward amount must be positive";
pub const ERR_ZERO_ADMIN: &str = "Admin cannot be the zero address";
