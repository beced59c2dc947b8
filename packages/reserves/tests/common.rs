#![allow(dead_code)]

use soroban_sdk::Env;
use ramm_math::{u256, WAD};
use ramm_reserves::{Context, ReserveState};

pub const DAY: u64 = 86_400;
pub const T0: u64 = 1_700_000_000;

/// capital = 1M ETH, supply = 10M NXM -> book value 0.1 ETH
pub fn context() -> Context {
    Context {
        capital: 1_000_000 * WAD,
        supply: 10_000_000 * WAD,
        min_capital_requirement: 500_000 * WAD,
    }
}

pub fn state(eth: u128, nxm_ceiling: u128, nxm_floor: u128, ratchet_speed: u128, budget: u128) -> ReserveState {
    ReserveState {
        eth_reserve: eth,
        nxm_ceiling,
        nxm_floor,
        ratchet_speed,
        liquidity_budget: budget,
        timestamp: T0,
    }
}

/// eth / nxm_ceiling >= capital / supply
pub fn ceiling_above_book_value(env: &Env, state: &ReserveState, context: &Context) -> bool {
    u256(env, state.eth_reserve).mul(&u256(env, context.supply))
        >= u256(env, state.nxm_ceiling).mul(&u256(env, context.capital))
}

/// eth / nxm_floor <= capital / supply
pub fn floor_below_book_value(env: &Env, state: &ReserveState, context: &Context) -> bool {
    u256(env, state.nxm_floor).mul(&u256(env, context.capital))
        >= u256(env, state.eth_reserve).mul(&u256(env, context.supply))
}

pub fn price(eth: u128, nxm: u128, env: &Env) -> u128 {
    ramm_math::wad_div(env, eth, nxm).unwrap()
}
