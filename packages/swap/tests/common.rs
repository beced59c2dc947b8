#![allow(dead_code)]

use ramm_math::{constants::PERIOD_SIZE, WAD};
use ramm_reserves::{Context, ReserveState};

pub const DAY: u64 = 86_400;
pub const T0: u64 = 1_000 * PERIOD_SIZE + 100;

pub fn context() -> Context {
    Context {
        capital: 1_000_000 * WAD,
        supply: 10_000_000 * WAD,
        min_capital_requirement: 500_000 * WAD,
    }
}

/// ceiling 0.2 ETH, floor 0.05 ETH
pub fn state() -> ReserveState {
    ReserveState {
        eth_reserve: 5_000 * WAD,
        nxm_ceiling: 25_000 * WAD,
        nxm_floor: 100_000 * WAD,
        ratchet_speed: 400,
        liquidity_budget: 0,
        timestamp: T0,
    }
}
