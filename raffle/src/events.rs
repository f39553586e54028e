use common::types::RequestId;
use near_sdk::json_types::U128;
use near_sdk::{AccountId, Balance, log};
use near_sdk::serde::Serialize;
use near_sdk::serde_json::json;

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct EntrantJoined<'a> {
    pub account_id: &'a AccountId,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct DrawRequested {
    pub request_id: RequestId,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct WinnerPicked<'a> {
    pub winner: &'a AccountId,
    pub prize: U128,
}

fn log_event<T: Serialize>(event: &str, data: T) {
    let event = json!({
        "standard": "raffle",
        "version": "1.0.0",
        "event": event,
        "data": [data]
    });

    log!("EVENT_JSON:{}", event.to_string());
}

pub fn entrant_joined(account_id: &AccountId){
    log_event(
        "entrant_joined",
        EntrantJoined {
            account_id,
        }
    );
}

pub fn draw_requested(request_id: RequestId){
    log_event(
        "draw_requested",
        DrawRequested {
            request_id,
        }
    );
}

pub fn winner_picked(winner: &AccountId, prize: Balance){
    log_event(
        "winner_picked",
        WinnerPicked {
            winner,
            prize: U128(prize),
        }
    );
}
