pub mod raffle {

    use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
    use near_sdk::serde::{Serialize, Deserialize};

    /// Lifecycle of the raffle. There is no terminal state: the contract
    /// cycles Open -> Calculating -> Open indefinitely. Once Calculating,
    /// only a fulfillment matching the pending request reopens it; a
    /// coordinator that never answers leaves it stuck (known limitation).
    #[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[serde(crate = "near_sdk::serde")]
    pub enum RaffleState{
        Open,
        Calculating,
    }
}

pub mod ledger {
    use near_sdk::{AccountId, Balance};

    #[derive(Debug, PartialEq, Eq)]
    pub enum PayoutError{
        TransferFailed,
    }

    /// Seam to the account that holds the pooled entry fees. The prize
    /// payout is the only operation that may move funds out of the pool.
    pub trait IPrizeLedger{
        fn transfer(&self, winner: &AccountId, amount: Balance) -> Result<(), PayoutError>;
    }
}
