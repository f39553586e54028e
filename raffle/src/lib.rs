use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::Vector;
use near_sdk::json_types::{Base64VecU8, U128};
use near_sdk::{env, log, near_bindgen, ext_contract, AccountId, Balance, PanicOnDefault, Promise, PromiseError};

use common::types::{RandomWord, RequestId, SubscriptionId};
use interfaces::raffle::RaffleState;
use interfaces::ledger::IPrizeLedger;
use ledger::PromiseLedger;
use upkeep::UpkeepSnapshot;
use utils::storage_keys::StorageKeys;
use utils::gas;
use errors::*;

pub mod external;
pub use crate::external::*;

pub mod interfaces;

mod errors;
mod events;
mod ledger;
mod upkeep;
mod utils;

#[cfg(test)]
mod test_utils;

const NUM_WORDS: u32 = 1;
const REQUEST_CONFIRMATIONS: u16 = 3;
const NO_DEPOSIT: Balance = 0;

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    state: RaffleState,
    // insertion order defines the index-to-account mapping used by the
    // winner selection, duplicates are allowed
    players: Vector<AccountId>,
    entrance_fee: Balance,
    interval_ms: u64,
    last_draw_timestamp_ms: u64,
    recent_winner: Option<AccountId>,
    pending_request_id: Option<RequestId>,
    prize_pool: Balance,
    vrf_coordinator: AccountId,
    gas_lane: String,
    subscription_id: SubscriptionId,
    callback_gas_limit: u64,
}

#[near_bindgen]
impl Contract {
    #[init]
    pub fn new(
        vrf_coordinator: AccountId,
        entrance_fee: U128,
        gas_lane: String,
        subscription_id: SubscriptionId,
        callback_gas_limit: u64,
        interval_ms: u64,
    ) -> Self {
        assert!(!env::state_exists(), "Already initialized");
        assert!(entrance_fee.0 > 0, "{}", ERR_ENTRANCE_FEE_MUST_BE_POSITIVE);
        assert!(interval_ms > 0, "{}", ERR_INTERVAL_MUST_BE_POSITIVE);

        Self {
            state: RaffleState::Open,
            players: Vector::new(StorageKeys::Players),
            entrance_fee: entrance_fee.0,
            interval_ms,
            last_draw_timestamp_ms: env::block_timestamp_ms(),
            recent_winner: None,
            pending_request_id: None,
            prize_pool: 0,
            vrf_coordinator,
            gas_lane,
            subscription_id,
            callback_gas_limit,
        }
    }

    /// Joins the current cycle. The whole attached deposit goes into the
    /// pot, overpayment above the entrance fee is not refunded.
    #[payable]
    pub fn enter_raffle(&mut self) {
        assert!(self.state == RaffleState::Open, "{}", ERR_RAFFLE_NOT_OPEN);
        assert!(
            env::attached_deposit() >= self.entrance_fee,
            "{}",
            ERR_NOT_ENOUGH_DEPOSIT
        );

        let entrant = env::predecessor_account_id();
        self.players.push(&entrant);
        self.prize_pool += env::attached_deposit();

        events::entrant_joined(&entrant);
    }

    /// Externally polled predicate. The payload is opaque and unused.
    pub fn check_upkeep(&self, check_data: Option<Base64VecU8>) -> (bool, Base64VecU8) {
        let _ = check_data;
        return (
            upkeep::upkeep_needed(&self.upkeep_snapshot()),
            Base64VecU8::from(vec![]),
        );
    }

    /// Starts a draw. The predicate is re-evaluated here, a `check_upkeep`
    /// result from an earlier block may be stale.
    pub fn perform_upkeep(&mut self, perform_data: Option<Base64VecU8>) -> Promise {
        let _ = perform_data;
        let snapshot = self.upkeep_snapshot();
        if !upkeep::upkeep_needed(&snapshot) {
            env::panic_str(&format!(
                "{}: balance={} players={} state={:?}",
                ERR_UPKEEP_NOT_NEEDED, snapshot.prize_pool, snapshot.num_players, snapshot.state
            ));
        }

        self.state = RaffleState::Calculating;

        return ext_vrf_coordinator::request_random_words(
            self.gas_lane.clone(),
            self.subscription_id,
            REQUEST_CONFIRMATIONS,
            self.callback_gas_limit,
            NUM_WORDS,
            self.vrf_coordinator.clone(),
            NO_DEPOSIT,
            gas::REQUEST_RANDOM_WORDS,
        )
        .then(this_contract::on_random_words_requested(
            env::current_account_id(),
            NO_DEPOSIT,
            gas::ON_RANDOM_WORDS_REQUESTED,
        ));
    }

    #[private]
    pub fn on_random_words_requested(
        &mut self,
        #[callback_result] call_result: Result<RequestId, PromiseError>,
    ) {
        match call_result {
            Ok(request_id) => {
                self.pending_request_id = Some(request_id);
                events::draw_requested(request_id);
            }
            Err(_) => {
                log!("Error when requesting random words, reopening the raffle");
                self.state = RaffleState::Open;
            }
        }
    }

    #[private]
    pub fn on_prize_payout(
        &mut self,
        winner: AccountId,
        amount: U128,
        #[callback_result] result: Result<(), PromiseError>,
    ) {
        if result.is_err() {
            // the transfer receipt failed, the refund lands back on this
            // account; roll it into the pot for the next draw
            log!("Prize transfer to {} failed, {} returned to the pool", winner, amount.0);
            self.prize_pool += amount.0;
        }
    }

    /// Push fulfillment from the coordinator, arriving in a separate
    /// execution with no latency bound.
    pub fn fulfill_random_words(&mut self, request_id: RequestId, random_words: Vec<RandomWord>) {
        assert_eq!(
            env::predecessor_account_id(),
            self.vrf_coordinator,
            "{}",
            ERR_ONLY_COORDINATOR
        );

        self.settle(request_id, &random_words, &PromiseLedger {});
    }

    pub fn get_raffle_state(&self) -> RaffleState {
        self.state
    }

    pub fn get_entrance_fee(&self) -> U128 {
        U128(self.entrance_fee)
    }

    pub fn get_interval(&self) -> u64 {
        self.interval_ms
    }

    pub fn get_number_of_players(&self) -> u64 {
        self.players.len()
    }

    pub fn get_player(&self, index: u64) -> AccountId {
        return self
            .players
            .get(index)
            .unwrap_or_else(|| env::panic_str(ERR_INDEX_OUT_OF_BOUNDS));
    }

    pub fn get_players(&self) -> Vec<AccountId> {
        self.players.to_vec()
    }

    pub fn get_recent_winner(&self) -> Option<AccountId> {
        self.recent_winner.clone()
    }

    pub fn get_latest_timestamp(&self) -> u64 {
        self.last_draw_timestamp_ms
    }

    pub fn get_prize_pool(&self) -> U128 {
        U128(self.prize_pool)
    }

    pub fn get_pending_request_id(&self) -> Option<RequestId> {
        self.pending_request_id
    }

    pub fn get_vrf_coordinator(&self) -> AccountId {
        self.vrf_coordinator.clone()
    }

    pub fn get_num_words(&self) -> u32 {
        NUM_WORDS
    }

    pub fn get_request_confirmations(&self) -> u16 {
        REQUEST_CONFIRMATIONS
    }
}

impl Contract {
    pub(crate) fn upkeep_snapshot(&self) -> UpkeepSnapshot {
        UpkeepSnapshot {
            state: self.state,
            now_ms: env::block_timestamp_ms(),
            last_draw_timestamp_ms: self.last_draw_timestamp_ms,
            interval_ms: self.interval_ms,
            num_players: self.players.len(),
            prize_pool: self.prize_pool,
        }
    }

    pub(crate) fn settle(
        &mut self,
        request_id: RequestId,
        random_words: &[RandomWord],
        ledger: &dyn IPrizeLedger,
    ) {
        match self.pending_request_id {
            Some(pending) if pending == request_id => {}
            _ => env::panic_str(ERR_UNKNOWN_REQUEST),
        }

        if random_words.is_empty() {
            env::panic_str(ERR_NO_RANDOM_WORDS);
        }

        let winner_index = (random_words[0] % RandomWord::from(self.players.len())).as_u64();
        let winner = self
            .players
            .get(winner_index)
            .unwrap_or_else(|| env::panic_str(ERR_NO_PLAYERS));

        // checks-effects-interactions: the raffle is fully reset before any
        // funds leave the pool
        let prize = self.prize_pool;
        let previous_winner = self.recent_winner.replace(winner.clone());
        let previous_timestamp_ms = self.last_draw_timestamp_ms;
        let entrants = self.players.to_vec();
        self.players.clear();
        self.state = RaffleState::Open;
        self.pending_request_id = None;
        self.last_draw_timestamp_ms = env::block_timestamp_ms();
        self.prize_pool = 0;

        if ledger.transfer(&winner, prize).is_err() {
            // restore every field so the same request can re-drive the draw
            self.recent_winner = previous_winner;
            for entrant in entrants.iter() {
                self.players.push(entrant);
            }
            self.state = RaffleState::Calculating;
            self.pending_request_id = Some(request_id);
            self.last_draw_timestamp_ms = previous_timestamp_ms;
            self.prize_pool = prize;
            env::panic_str(ERR_PAYOUT_FAILED);
        }

        events::winner_picked(&winner, prize);
    }
}
