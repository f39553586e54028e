use common::types::{RandomWord, RequestId, SubscriptionId};
use common::utils::as_u256;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::LookupMap;
use near_sdk::json_types::U128;
use near_sdk::{env, log, near_bindgen, ext_contract, AccountId, Balance, Gas, PanicOnDefault, Promise};

pub mod external;
pub use crate::external::*;

pub const ERR_NONEXISTENT_REQUEST: &str = "nonexistent request";
pub const ERR_NONEXISTENT_SUBSCRIPTION: &str = "nonexistent subscription";
pub const ERR_INVALID_CONSUMER: &str = "invalid consumer";
pub const ERR_INSUFFICIENT_SUBSCRIPTION_BALANCE: &str = "insufficient subscription balance";
pub const ERR_WRONG_WORD_COUNT: &str = "wrong number of random words";

#[derive(BorshDeserialize, BorshSerialize)]
pub struct Subscription {
    pub balance: Balance,
    pub consumers: Vec<AccountId>,
}

#[derive(BorshDeserialize, BorshSerialize)]
pub struct PendingRequest {
    pub consumer: AccountId,
    pub subscription_id: SubscriptionId,
    pub num_words: u32,
    pub callback_gas_limit: u64,
}

/// Local stand-in for the external verifiable-randomness service. Request
/// ids are handed out from a strictly increasing counter and are never
/// reused; fulfillment pushes the words to the consumer contract.
#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    base_fee: Balance,
    next_request_id: RequestId,
    next_subscription_id: SubscriptionId,
    subscriptions: LookupMap<SubscriptionId, Subscription>,
    requests: LookupMap<RequestId, PendingRequest>,
}

#[near_bindgen]
impl Contract {
    #[init]
    pub fn new(base_fee: U128) -> Self {
        Self {
            base_fee: base_fee.0,
            next_request_id: 1,
            next_subscription_id: 1,
            subscriptions: LookupMap::new(b"s".to_vec()),
            requests: LookupMap::new(b"r".to_vec()),
        }
    }

    pub fn create_subscription(&mut self) -> SubscriptionId {
        let subscription_id = self.next_subscription_id;
        self.next_subscription_id += 1;
        self.subscriptions.insert(
            &subscription_id,
            &Subscription {
                balance: 0,
                consumers: Vec::new(),
            },
        );

        return subscription_id;
    }

    pub fn fund_subscription(&mut self, subscription_id: SubscriptionId, amount: U128) {
        let mut subscription = self.get_subscription(subscription_id);
        subscription.balance += amount.0;
        self.subscriptions.insert(&subscription_id, &subscription);
    }

    pub fn add_consumer(&mut self, subscription_id: SubscriptionId, consumer: AccountId) {
        let mut subscription = self.get_subscription(subscription_id);
        if !subscription.consumers.contains(&consumer) {
            subscription.consumers.push(consumer);
            self.subscriptions.insert(&subscription_id, &subscription);
        }
    }

    pub fn get_subscription_balance(&self, subscription_id: SubscriptionId) -> U128 {
        U128(self.get_subscription(subscription_id).balance)
    }

    /// Registers a randomness request and returns its fresh correlation id.
    /// The words arrive later through `fulfill_random_words`, there is no
    /// latency bound. The gas lane is accepted for interface parity and
    /// ignored, as is the confirmation count.
    pub fn request_random_words(
        &mut self,
        gas_lane: String,
        subscription_id: SubscriptionId,
        request_confirmations: u16,
        callback_gas_limit: u64,
        num_words: u32,
    ) -> RequestId {
        let mut subscription = self.get_subscription(subscription_id);
        let consumer = env::predecessor_account_id();
        assert!(
            subscription.consumers.contains(&consumer),
            "{}",
            ERR_INVALID_CONSUMER
        );
        assert!(
            subscription.balance >= self.base_fee,
            "{}",
            ERR_INSUFFICIENT_SUBSCRIPTION_BALANCE
        );

        subscription.balance -= self.base_fee;
        self.subscriptions.insert(&subscription_id, &subscription);

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.requests.insert(
            &request_id,
            &PendingRequest {
                consumer: consumer.clone(),
                subscription_id,
                num_words,
                callback_gas_limit,
            },
        );

        log!(
            "Random words requested: id={} consumer={} lane={} confirmations={}",
            request_id,
            consumer,
            gas_lane,
            request_confirmations
        );

        return request_id;
    }

    /// Answers a pending request with words derived from the block's
    /// random seed.
    pub fn fulfill_random_words(&mut self, request_id: RequestId) -> Promise {
        let request = self.take_request(request_id);
        let words = random_words(request.num_words);

        return self.dispatch(request_id, request, words);
    }

    /// Deterministic variant for tests: the caller supplies the words.
    pub fn fulfill_random_words_with_override(
        &mut self,
        request_id: RequestId,
        words: Vec<RandomWord>,
    ) -> Promise {
        let request = self.take_request(request_id);
        assert_eq!(
            words.len() as u32,
            request.num_words,
            "{}",
            ERR_WRONG_WORD_COUNT
        );

        return self.dispatch(request_id, request, words);
    }
}

impl Contract {
    fn get_subscription(&self, subscription_id: SubscriptionId) -> Subscription {
        return self
            .subscriptions
            .get(&subscription_id)
            .unwrap_or_else(|| env::panic_str(ERR_NONEXISTENT_SUBSCRIPTION));
    }

    fn take_request(&mut self, request_id: RequestId) -> PendingRequest {
        return self
            .requests
            .remove(&request_id)
            .unwrap_or_else(|| env::panic_str(ERR_NONEXISTENT_REQUEST));
    }

    fn dispatch(
        &self,
        request_id: RequestId,
        request: PendingRequest,
        words: Vec<RandomWord>,
    ) -> Promise {
        return ext_consumer::fulfill_random_words(
            request_id,
            words,
            request.consumer,
            0,
            Gas(request.callback_gas_limit),
        );
    }
}

fn random_words(num_words: u32) -> Vec<RandomWord> {
    let seed: [u8; 32] = env::random_seed()
        .as_slice()
        .try_into()
        .expect("random seed of incorrect length");

    let mut words: Vec<RandomWord> = Vec::new();
    for idx in 0..num_words {
        let bytes = env::keccak256_array(&[&seed[..], &idx.to_le_bytes()[..]].concat());
        words.push(as_u256(&bytes));
    }

    return words;
}
