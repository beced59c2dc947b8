// Reserve projection

use soroban_sdk::Env;
use ramm_math::{mul_div, mul_div_round_up, RammError};
use crate::liquidity::rebalance_liquidity;
use crate::ratchet::{ratchet_ceiling, ratchet_floor};
use crate::types::{Context, RammConfig, ReserveState};

/// Project `state` forward to `target_time`
///
/// Pure: the same inputs always produce the same state, so read-only views
/// and mutating calls agree on where the reserves are.
///
/// 1. Liquidity step moves the ETH reserve toward target.
/// 2. Both NXM reserves are rescaled with the ETH reserve so the liquidity
///    step alone leaves prices untouched.
/// 3. Each bound ratchets toward book value, or is clamped onto it.
///
/// # Errors
/// * `InvalidInput` - `target_time` is before `state.timestamp`, or the
///   context carries zero capital or supply
/// * `ArithmeticOverflow` - an intermediate does not fit
pub fn project(
    env: &Env,
    state: &ReserveState,
    context: &Context,
    config: &RammConfig,
    target_time: u64,
) -> Result<ReserveState, RammError> {
    context.validate()?;

    let elapsed = target_time
        .checked_sub(state.timestamp)
        .ok_or(RammError::InvalidInput)?;

    let step = rebalance_liquidity(
        env,
        state.eth_reserve,
        state.liquidity_budget,
        config,
        elapsed,
    )?;
    let eth = step.eth_reserve;

    let nxm_ceiling = mul_div(env, state.nxm_ceiling, eth, state.eth_reserve)?;
    let nxm_floor = mul_div_round_up(env, state.nxm_floor, eth, state.eth_reserve)?;

    let nxm_ceiling = ratchet_ceiling(
        env,
        eth,
        nxm_ceiling,
        context,
        config,
        state.ratchet_speed,
        elapsed,
    )?;
    let nxm_floor = ratchet_floor(
        env,
        eth,
        nxm_floor,
        context,
        config,
        state.ratchet_speed,
        elapsed,
    )?;

    Ok(ReserveState {
        eth_reserve: eth,
        nxm_ceiling,
        nxm_floor,
        ratchet_speed: state.ratchet_speed,
        liquidity_budget: step.liquidity_budget,
        timestamp: target_time,
    })
}
