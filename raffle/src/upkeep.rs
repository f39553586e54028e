use near_sdk::Balance;

use crate::interfaces::raffle::RaffleState;

/// Point-in-time view of everything the upkeep predicate looks at.
pub struct UpkeepSnapshot{
    pub state: RaffleState,
    pub now_ms: u64,
    pub last_draw_timestamp_ms: u64,
    pub interval_ms: u64,
    pub num_players: u64,
    pub prize_pool: Balance,
}

/// A draw may start iff the raffle is open, the interval has elapsed,
/// there is at least one player and the pot is non-empty. The caller must
/// re-evaluate this at perform time, a cached result may be stale.
pub fn upkeep_needed(snapshot: &UpkeepSnapshot) -> bool{
    let is_open = snapshot.state == RaffleState::Open;
    let interval_elapsed =
        snapshot.now_ms.saturating_sub(snapshot.last_draw_timestamp_ms) >= snapshot.interval_ms;
    let has_players = snapshot.num_players > 0;
    let has_pot = snapshot.prize_pool > 0;

    return is_open && interval_elapsed && has_players && has_pot;
}
