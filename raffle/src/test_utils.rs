use near_sdk::test_utils::VMContextBuilder;
use near_sdk::json_types::U128;
use near_sdk::{testing_env, AccountId, Balance, VMContext};

use crate::Contract;

/// 0.01 NEAR
pub const ENTRANCE_FEE: Balance = 10_000_000_000_000_000_000_000;
pub const INTERVAL_MS: u64 = 30_000;
pub const CALLBACK_GAS: u64 = 30_000_000_000_000;

pub fn alice() -> AccountId {
    "alice".parse().unwrap()
}
pub fn bob() -> AccountId {
    "bob".parse().unwrap()
}
pub fn charlie() -> AccountId {
    "charlie".parse().unwrap()
}
pub fn dan() -> AccountId {
    "dan".parse().unwrap()
}
pub fn owner() -> AccountId {
    "owner".parse().unwrap()
}
pub fn coordinator() -> AccountId {
    "vrf-coordinator".parse().unwrap()
}
pub fn raffle_acc() -> AccountId {
    "raffle".parse().unwrap()
}

pub fn ntoy(near_amount: Balance) -> Balance {
    near_amount * 10u128.pow(24)
}

pub struct Emulator {
    pub contract: Contract,
    pub block_timestamp_ms: u64,
    pub context: VMContext,
}

impl Emulator {
    pub fn new() -> Self {
        let context = VMContextBuilder::new()
            .current_account_id(raffle_acc())
            .predecessor_account_id(owner())
            .account_balance(ntoy(10))
            .build();
        testing_env!(context.clone());
        let contract = Contract::new(
            coordinator(),
            U128(ENTRANCE_FEE),
            "gas-lane".to_string(),
            1,
            CALLBACK_GAS,
            INTERVAL_MS,
        );
        Emulator {
            contract,
            block_timestamp_ms: 0,
            context,
        }
    }

    pub fn update_context(&mut self, predecessor: AccountId, deposit: Balance) {
        self.context = VMContextBuilder::new()
            .current_account_id(raffle_acc())
            .predecessor_account_id(predecessor)
            .attached_deposit(deposit)
            .block_timestamp(self.block_timestamp_ms * 1_000_000)
            .account_balance(ntoy(10))
            .build();
        testing_env!(self.context.clone());
    }

    pub fn skip_time(&mut self, ms: u64) {
        self.block_timestamp_ms += ms;
        self.update_context(owner(), 0);
    }

    pub fn enter(&mut self, entrant: AccountId, deposit: Balance) {
        self.update_context(entrant, deposit);
        self.contract.enter_raffle();
    }
}
