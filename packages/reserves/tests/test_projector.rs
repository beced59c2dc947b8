mod common;

use soroban_sdk::Env;
use ramm_math::{constants::FAST_RATCHET_SPEED, RammError, WAD};
use ramm_reserves::{project, Context, RammConfig};
use common::{
    ceiling_above_book_value, context, floor_below_book_value, price, state, DAY, T0,
};

#[test]
fn test_zero_elapsed_identity() {
    let env = Env::default();
    let config = RammConfig::default();
    let s = state(5_000 * WAD, 25_000 * WAD, 100_000 * WAD, FAST_RATCHET_SPEED, 1_000 * WAD);

    let projected = project(&env, &s, &context(), &config, s.timestamp).unwrap();
    assert_eq!(projected, s);
}

#[test]
fn test_projection_is_idempotent() {
    let env = Env::default();
    let ctx = context();
    let config = RammConfig::default();
    let s = state(4_000 * WAD, 30_000 * WAD, 60_000 * WAD, FAST_RATCHET_SPEED, 500 * WAD);

    let once = project(&env, &s, &ctx, &config, T0 + 3 * DAY).unwrap();
    let twice = project(&env, &once, &ctx, &config, T0 + 3 * DAY).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_projection_is_deterministic() {
    let env = Env::default();
    let ctx = context();
    let config = RammConfig::default();
    let s = state(4_000 * WAD, 30_000 * WAD, 60_000 * WAD, FAST_RATCHET_SPEED, 500 * WAD);

    let a = project(&env, &s, &ctx, &config, T0 + 12_345).unwrap();
    let b = project(&env, &s, &ctx, &config, T0 + 12_345).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_liquidity_step_leaves_price_alone() {
    let env = Env::default();
    let ctx = context();
    let config = RammConfig::default();
    // zero ratchet isolates the liquidity step
    let s = state(4_000 * WAD, 20_000 * WAD, 80_000 * WAD, 0, 500 * WAD);

    let projected = project(&env, &s, &ctx, &config, T0 + DAY).unwrap();

    assert!(projected.eth_reserve > s.eth_reserve);
    let before_ceiling = price(s.eth_reserve, s.nxm_ceiling, &env);
    let after_ceiling = price(projected.eth_reserve, projected.nxm_ceiling, &env);
    assert!(after_ceiling >= before_ceiling && after_ceiling - before_ceiling <= 1);

    let before_floor = price(s.eth_reserve, s.nxm_floor, &env);
    let after_floor = price(projected.eth_reserve, projected.nxm_floor, &env);
    assert!(after_floor <= before_floor && before_floor - after_floor <= 1);
}

#[test]
fn test_long_dormancy_lands_on_book_value() {
    let env = Env::default();
    let ctx = context();
    let config = RammConfig::default();
    let s = state(5_000 * WAD, 25_000 * WAD, 100_000 * WAD, FAST_RATCHET_SPEED, 0);

    let projected = project(&env, &s, &ctx, &config, T0 + 365 * DAY).unwrap();

    let ceiling = price(projected.eth_reserve, projected.nxm_ceiling, &env);
    let floor = price(projected.eth_reserve, projected.nxm_floor, &env);
    assert!(ceiling >= 101 * WAD / 1_000 && ceiling <= 101 * WAD / 1_000 + 1);
    assert!(floor <= 99 * WAD / 1_000 && floor + 1 >= 99 * WAD / 1_000);
}

#[test]
fn test_corridor_follows_capital_change() {
    let env = Env::default();
    let config = RammConfig::default();
    let s = state(5_000 * WAD, 45_000 * WAD, 55_000 * WAD, FAST_RATCHET_SPEED, 0);

    // capital jumps 20%: book value 0.12 sits above the 0.111 ceiling
    let ctx = Context {
        capital: 1_200_000 * WAD,
        ..context()
    };
    let projected = project(&env, &s, &ctx, &config, T0).unwrap();

    assert!(ceiling_above_book_value(&env, &projected, &ctx));
    assert!(floor_below_book_value(&env, &projected, &ctx));
}

#[test]
fn test_target_in_past_rejected() {
    let env = Env::default();
    let s = state(5_000 * WAD, 25_000 * WAD, 100_000 * WAD, FAST_RATCHET_SPEED, 0);

    let result = project(&env, &s, &context(), &RammConfig::default(), T0 - 1);
    assert_eq!(result, Err(RammError::InvalidInput));
}

#[test]
fn test_zero_supply_rejected() {
    let env = Env::default();
    let s = state(5_000 * WAD, 25_000 * WAD, 100_000 * WAD, FAST_RATCHET_SPEED, 0);
    let ctx = Context {
        supply: 0,
        ..context()
    };

    let result = project(&env, &s, &ctx, &RammConfig::default(), T0 + DAY);
    assert_eq!(result, Err(RammError::InvalidInput));
}
