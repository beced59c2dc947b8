// Ratchet: pull each bound toward book value at a capped rate
//
// Both bounds move by `book_value * ratchet_speed * elapsed / (P * D)` in
// price terms, where P = RATCHET_PERIOD and D = RATCHET_DENOMINATOR. A bound
// that would cross its buffered book value is clamped onto it instead.
//
// Rounding always pushes the ceiling price up and the floor price down so
// the corridor keeps book value inside it.

use soroban_sdk::{Env, U256};
use ramm_math::{
    constants::{RATCHET_DENOMINATOR, RATCHET_PERIOD},
    mul_div, mul_div_round_up, to_u128, u256, RammError,
};
use crate::types::{Context, RammConfig};

#[inline]
fn ratchet_scale(env: &Env) -> U256 {
    u256(env, RATCHET_PERIOD as u128 * RATCHET_DENOMINATOR)
}

/// capital * nxm * elapsed * speed, the drift numerator shared by both bounds
fn drift_numerator(env: &Env, capital: u128, nxm: u128, elapsed: u64, ratchet_speed: u128) -> U256 {
    u256(env, capital)
        .mul(&u256(env, nxm))
        .mul(&u256(env, elapsed as u128))
        .mul(&u256(env, ratchet_speed))
}

/// ETH amount the bound's price moves, expressed against `nxm` units
fn price_drift(
    env: &Env,
    context: &Context,
    nxm: u128,
    elapsed: u64,
    ratchet_speed: u128,
) -> Result<u128, RammError> {
    let denominator = u256(env, context.supply).mul(&ratchet_scale(env));
    let numerator = drift_numerator(env, context.capital, nxm, elapsed, ratchet_speed);
    to_u128(&numerator.div(&denominator))
}

/// Project the ceiling NXM reserve forward by `elapsed`
///
/// Ceiling price falls toward `buffered_capital_ceiling / supply`.
pub fn ratchet_ceiling(
    env: &Env,
    eth: u128,
    nxm: u128,
    context: &Context,
    config: &RammConfig,
    ratchet_speed: u128,
    elapsed: u64,
) -> Result<u128, RammError> {
    let buffered_capital = config.buffered_capital_ceiling(env, context.capital)?;
    let scale = ratchet_scale(env);

    // eth * supply * P * D >= nxm * (buffered * P * D + capital * elapsed * speed)
    let lhs = u256(env, eth).mul(&u256(env, context.supply)).mul(&scale);
    let rhs = u256(env, nxm).mul(&u256(env, buffered_capital).mul(&scale)).add(
        &drift_numerator(env, context.capital, nxm, elapsed, ratchet_speed),
    );

    if lhs >= rhs {
        let drift = price_drift(env, context, nxm, elapsed, ratchet_speed)?;
        // drift < eth follows from the branch condition
        return mul_div(env, eth, nxm, eth - drift);
    }

    mul_div(env, eth, context.supply, buffered_capital)
}

/// Project the floor NXM reserve forward by `elapsed`
///
/// Floor price rises toward `buffered_capital_floor / supply`.
pub fn ratchet_floor(
    env: &Env,
    eth: u128,
    nxm: u128,
    context: &Context,
    config: &RammConfig,
    ratchet_speed: u128,
    elapsed: u64,
) -> Result<u128, RammError> {
    let buffered_capital = config.buffered_capital_floor(env, context.capital)?;
    let scale = ratchet_scale(env);

    // nxm * buffered * P * D >= eth * supply * P * D + capital * nxm * elapsed * speed
    let lhs = u256(env, nxm).mul(&u256(env, buffered_capital)).mul(&scale);
    let rhs = u256(env, eth)
        .mul(&u256(env, context.supply))
        .mul(&scale)
        .add(&drift_numerator(env, context.capital, nxm, elapsed, ratchet_speed));

    if lhs >= rhs {
        let drift = price_drift(env, context, nxm, elapsed, ratchet_speed)?;
        let denominator = eth
            .checked_add(drift)
            .ok_or(RammError::ArithmeticOverflow)?;
        return mul_div_round_up(env, eth, nxm, denominator);
    }

    mul_div_round_up(env, eth, context.supply, buffered_capital)
}
