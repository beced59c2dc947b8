mod common;

use soroban_sdk::Env;
use ramm_math::{constants::PERIOD_SIZE, RammError, CUMULATIVE_MASK, WAD};
use ramm_reserves::{project, Context, RammConfig};
use ramm_twap::*;
use common::{context, ratcheting_state, DAY, T0};

// ============================================================
// BOOK VALUE / SPOT
// ============================================================

#[test]
fn test_book_value() {
    let env = Env::default();
    assert_eq!(book_value(&env, &context()).unwrap(), WAD / 10);
}

#[test]
fn test_book_value_rejects_empty_pool() {
    let env = Env::default();
    let empty = Context {
        capital: 0,
        supply: 10_000_000 * WAD,
        min_capital_requirement: 0,
    };
    assert_eq!(book_value(&env, &empty), Err(RammError::InvalidInput));
}

#[test]
fn test_spot_prices() {
    let env = Env::default();
    let spot = spot_prices(&env, &ratcheting_state()).unwrap();
    assert_eq!(spot.ceiling, WAD / 5);
    assert_eq!(spot.floor, WAD / 20);
}

// ============================================================
// AVERAGES
// ============================================================

#[test]
fn test_average_prices_across_wrap() {
    let now = 1_002 * PERIOD_SIZE + 10;
    let slot = slot_for(now);
    let mut ring = genesis_observations(now - 1_000);

    // reference sits 500 below 2^112, current has wrapped past zero
    ring[(slot + 1) % 3].price_cumulative_ceiling = CUMULATIVE_MASK - 499;
    ring[(slot + 1) % 3].price_cumulative_floor = 0;
    ring[slot] = Observation {
        timestamp: now,
        price_cumulative_ceiling: 1_500,
        price_cumulative_floor: 3_000,
    };

    let average = average_prices(&ring, now).unwrap();
    assert_eq!(average.ceiling, 2);
    assert_eq!(average.floor, 3);
}

#[test]
fn test_average_prices_requires_current_observation() {
    let ring = genesis_observations(T0);
    assert_eq!(average_prices(&ring, T0 + 1), Err(RammError::StaleObservation));
}

#[test]
fn test_average_prices_empty_window() {
    let ring = genesis_observations(T0);
    assert_eq!(average_prices(&ring, T0), Err(RammError::StaleObservation));
}

// ============================================================
// INTERNAL PRICE
// ============================================================

#[test]
fn test_internal_price_at_activation_is_stale() {
    let env = Env::default();
    let result = projected_internal_price(
        &env,
        &ratcheting_state(),
        &genesis_observations(T0),
        &context(),
        &RammConfig::default(),
        T0,
    );
    assert_eq!(result, Err(RammError::StaleObservation));
}

#[test]
fn test_internal_price_follows_spot_while_ratcheting() {
    let env = Env::default();
    let ctx = context();
    let config = RammConfig::default();
    let state = ratcheting_state();

    let price = projected_internal_price(&env, &state, &genesis_observations(T0), &ctx, &config, T0 + DAY)
        .unwrap();

    // ceiling falls and floor rises, spot is the conservative side of both
    let spot = spot_prices(&env, &project(&env, &state, &ctx, &config, T0 + DAY).unwrap()).unwrap();
    assert_eq!(price, spot.ceiling + spot.floor - WAD / 10);
}

#[test]
fn test_internal_price_caps_ceiling_jump_with_average() {
    let env = Env::default();
    let ctx = context();
    let config = RammConfig::default();
    let now = T0 + DAY;

    let state = ratcheting_state();
    let ring = update_observations(&env, &state, &genesis_observations(T0), &ctx, &config, now).unwrap();

    // a large buy at `now` doubles the spot ceiling
    let mut after_buy = project(&env, &state, &ctx, &config, now).unwrap();
    after_buy.nxm_ceiling /= 2;

    let spot = spot_prices(&env, &after_buy).unwrap();
    let average = average_prices(&ring, now).unwrap();
    assert!(spot.ceiling > average.ceiling);

    let price = internal_price(&env, &after_buy, &ring, &ctx, now).unwrap();
    assert_eq!(price, average.ceiling + spot.floor - WAD / 10);
}

#[test]
fn test_internal_price_continuous_across_period_boundary() {
    let env = Env::default();
    let ctx = context();
    let config = RammConfig::default();
    let state = ratcheting_state();
    let ring = genesis_observations(T0);
    let boundary = 1_001 * PERIOD_SIZE;

    let at_boundary = projected_internal_price(&env, &state, &ring, &ctx, &config, boundary).unwrap();
    let after_boundary = projected_internal_price(&env, &state, &ring, &ctx, &config, boundary + 1).unwrap();

    assert!(at_boundary.abs_diff(after_boundary) <= 1_000_000_000_000);
}

#[test]
fn test_internal_price_continuous_when_reference_slot_moves() {
    let env = Env::default();
    let ctx = context();
    let config = RammConfig::default();
    let state = ratcheting_state();
    let ring = genesis_observations(T0);

    // the averaging reference moves from 1002*P to 1003*P across this boundary
    let boundary = 1_004 * PERIOD_SIZE;

    let before = update_observations(&env, &state, &ring, &ctx, &config, boundary).unwrap();
    let after = update_observations(&env, &state, &ring, &ctx, &config, boundary + 1).unwrap();
    assert_eq!(before[(slot_for(boundary) + 1) % 3].timestamp, 1_002 * PERIOD_SIZE);
    assert_eq!(after[(slot_for(boundary + 1) + 1) % 3].timestamp, 1_003 * PERIOD_SIZE);

    let at_boundary = projected_internal_price(&env, &state, &ring, &ctx, &config, boundary).unwrap();
    let after_boundary = projected_internal_price(&env, &state, &ring, &ctx, &config, boundary + 1).unwrap();

    assert!(at_boundary.abs_diff(after_boundary) <= 1_000_000_000_000);
}

#[test]
fn test_projected_internal_price_rejects_stale_ring() {
    let env = Env::default();
    let result = projected_internal_price(
        &env,
        &ratcheting_state(),
        &genesis_observations(T0 + 1),
        &context(),
        &RammConfig::default(),
        T0 + DAY,
    );
    assert_eq!(result, Err(RammError::StaleObservation));
}
