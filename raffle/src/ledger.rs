use near_sdk::json_types::U128;
use near_sdk::{env, AccountId, Balance, Promise};

use crate::interfaces::ledger::{IPrizeLedger, PayoutError};
use crate::utils::gas;

/// Pays the prize with a native NEAR transfer from the contract account.
/// Scheduling itself cannot fail; the transfer receipt lands in a later
/// block and its outcome is observed by the `on_prize_payout` callback.
pub(crate) struct PromiseLedger;

impl IPrizeLedger for PromiseLedger{
    fn transfer(&self, winner: &AccountId, amount: Balance) -> Result<(), PayoutError>{
        Promise::new(winner.clone())
            .transfer(amount)
            .then(crate::this_contract::on_prize_payout(
                winner.clone(),
                U128(amount),
                env::current_account_id(),
                0,
                gas::ON_PRIZE_PAYOUT,
            ));

        return Ok(());
    }
}
