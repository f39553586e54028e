use crate::*;

#[ext_contract(ext_consumer)]
pub trait VrfConsumer {
    fn fulfill_random_words(&mut self, request_id: RequestId, random_words: Vec<RandomWord>);
}
