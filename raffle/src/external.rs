use crate::*;

// Callback
#[ext_contract(this_contract)]
pub trait ExtSelf {
    fn on_random_words_requested(&mut self, #[callback_result] call_result: Result<RequestId, PromiseError>);
    fn on_prize_payout(&mut self, winner: AccountId, amount: U128, #[callback_result] result: Result<(), PromiseError>);
}

#[ext_contract(ext_vrf_coordinator)]
pub trait ExtVrfCoordinator {
    fn request_random_words(
        &mut self,
        gas_lane: String,
        subscription_id: SubscriptionId,
        request_confirmations: u16,
        callback_gas_limit: u64,
        num_words: u32,
    ) -> RequestId;
}
