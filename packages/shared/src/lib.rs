// Shared types and utilities for the estate-planning contracts on CosmWasm

use cosmwasm_schema::cw_serde;

/// How out-of-range numeric input is treated by a contract.
#[cw_serde]
#[derive(Default, Copy)]
pub enum InputPolicy {
    /// Replace out-of-range values with the documented default
    #[default]
    Clamp,
    /// Reject out-of-range values with an error
    Strict,
}

// Common helper functions

/// First timestamp at which a window opened at `since` is no longer current
pub fn deadline(since: u64, period: u64) -> u64 {
    since.saturating_add(period)
}

/// Check if a window of `period` seconds starting at `since` has strictly elapsed
pub fn has_elapsed(current_time: u64, since: u64, period: u64) -> bool {
    current_time > deadline(since, period)
}

/// Seconds left until the window has strictly elapsed (None once it has)
pub fn time_remaining(current_time: u64, since: u64, period: u64) -> Option<u64> {
    if has_elapsed(current_time, since, period) {
        None
    } else {
        Some(deadline(since, period) - current_time + 1)
    }
}
