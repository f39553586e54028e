use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Serialize, Deserialize};
use uint::construct_uint;

/// Correlation key binding a randomness request to its fulfillment.
pub type RequestId = u64;
pub type SubscriptionId = u64;

construct_uint!{
    /// 256-bit unsigned integer
    #[derive(Serialize, Deserialize, BorshDeserialize, BorshSerialize)]
    pub struct U256(4);
}

pub type RandomWord = U256;
