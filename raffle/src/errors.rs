pub const ERR_NOT_ENOUGH_DEPOSIT: &str = "ERR_NOT_ENOUGH_DEPOSIT";
pub const ERR_RAFFLE_NOT_OPEN: &str = "ERR_RAFFLE_NOT_OPEN";
pub const ERR_UPKEEP_NOT_NEEDED: &str = "ERR_UPKEEP_NOT_NEEDED";
pub const ERR_UNKNOWN_REQUEST: &str = "ERR_UNKNOWN_REQUEST";
pub const ERR_PAYOUT_FAILED: &str = "ERR_PAYOUT_FAILED";
pub const ERR_ONLY_COORDINATOR: &str = "ERR_ONLY_COORDINATOR";
pub const ERR_NO_RANDOM_WORDS: &str = "ERR_NO_RANDOM_WORDS";
pub const ERR_NO_PLAYERS: &str = "ERR_NO_PLAYERS";
pub const ERR_INDEX_OUT_OF_BOUNDS: &str = "ERR_INDEX_OUT_OF_BOUNDS";
pub const ERR_ENTRANCE_FEE_MUST_BE_POSITIVE: &str = "ERR_ENTRANCE_FEE_MUST_BE_POSITIVE";
pub const ERR_INTERVAL_MUST_BE_POSITIVE: &str = "ERR_INTERVAL_MUST_BE_POSITIVE";
