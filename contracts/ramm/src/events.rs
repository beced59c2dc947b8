// RAMM events module
// All events use compact names to reduce storage/gas costs

use soroban_sdk::{Address, Env, Symbol};
use ramm_reserves::ReserveState;

use crate::types::RammInit;

/// Emitted once at activation
/// Topics: ("RammInit",)
/// Data: (admin, operator, eth_reserve, nxm_ceiling, nxm_floor, liquidity_budget, ratchet_speed)
pub fn emit_initialized(env: &Env, admin: &Address, operator: &Address, init: &RammInit) {
    env.events().publish(
        (Symbol::new(env, "RammInit"),),
        (
            admin.clone(),
            operator.clone(),
            init.eth_reserve,
            init.nxm_ceiling,
            init.nxm_floor,
            init.liquidity_budget,
            init.ratchet_speed,
        ),
    );
}

/// Emitted after every buy
/// Topics: ("Buy",)
/// Data: (eth_in, nxm_out, eth_reserve, nxm_ceiling, nxm_floor)
pub fn emit_buy(env: &Env, eth_in: u128, nxm_out: u128, state: &ReserveState) {
    env.events().publish(
        (Symbol::new(env, "Buy"),),
        (eth_in, nxm_out, state.eth_reserve, state.nxm_ceiling, state.nxm_floor),
    );
}

/// Emitted after every sell
/// Topics: ("Sell",)
/// Data: (nxm_in, eth_out, eth_reserve, nxm_ceiling, nxm_floor)
pub fn emit_sell(env: &Env, nxm_in: u128, eth_out: u128, state: &ReserveState) {
    env.events().publish(
        (Symbol::new(env, "Sell"),),
        (nxm_in, eth_out, state.eth_reserve, state.nxm_ceiling, state.nxm_floor),
    );
}

/// Topics: ("TwapSync",)
/// Data: (timestamp, internal_price)
pub fn emit_twap_sync(env: &Env, timestamp: u64, internal_price: u128) {
    env.events()
        .publish((Symbol::new(env, "TwapSync"),), (timestamp, internal_price));
}

/// Topics: ("Paused",)
/// Data: paused
pub fn emit_paused(env: &Env, paused: bool) {
    env.events().publish((Symbol::new(env, "Paused"),), paused);
}

/// Topics: ("CBLimits",)
/// Data: (eth_limit, nxm_limit)
pub fn emit_circuit_breaker_limits(env: &Env, eth_limit: u128, nxm_limit: u128) {
    env.events()
        .publish((Symbol::new(env, "CBLimits"),), (eth_limit, nxm_limit));
}

/// Topics: ("BudgetRm",)
/// Data: (timestamp, ratchet_speed)
pub fn emit_budget_removed(env: &Env, timestamp: u64, ratchet_speed: u128) {
    env.events()
        .publish((Symbol::new(env, "BudgetRm"),), (timestamp, ratchet_speed));
}
