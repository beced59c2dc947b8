#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env,
};
use ramm_contract::{Context, Ramm, RammClient, RammConfig, RammInit};
use ramm_math::{constants::PERIOD_SIZE, WAD};

pub const DAY: u64 = 86_400;

/// Activation time, 100 seconds into period 1001
pub const T0: u64 = 1_000 * PERIOD_SIZE + 100;

/// Far enough out that swaps never expire in tests
pub const NO_DEADLINE: u64 = u64::MAX;

/// capital = 1M ETH, supply = 10M NXM -> book value 0.1 ETH
pub fn context() -> Context {
    Context {
        capital: 1_000_000 * WAD,
        supply: 10_000_000 * WAD,
        min_capital_requirement: 500_000 * WAD,
    }
}

/// ceiling 0.2, floor 0.05, ETH at target, no budget
pub fn default_init() -> RammInit {
    RammInit {
        eth_reserve: 5_000 * WAD,
        nxm_ceiling: 25_000 * WAD,
        nxm_floor: 100_000 * WAD,
        liquidity_budget: 0,
        ratchet_speed: 400,
    }
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}

/// Register without initializing
pub fn register_ramm(env: &Env) -> RammClient<'_> {
    set_time(env, T0);
    let ramm_id = env.register(Ramm, ());
    RammClient::new(env, &ramm_id)
}

/// Setup RAMM with default parameters at T0
/// Returns (client, admin, operator)
pub fn setup_ramm(env: &Env) -> (RammClient<'_>, Address, Address) {
    setup_custom_ramm(env, default_init())
}

pub fn setup_custom_ramm(env: &Env, init: RammInit) -> (RammClient<'_>, Address, Address) {
    let admin = Address::generate(env);
    let operator = Address::generate(env);

    let client = register_ramm(env);
    client.initialize(&admin, &operator, &RammConfig::default(), &init, &context());

    (client, admin, operator)
}
