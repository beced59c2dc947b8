// Swap engine
//
// Each trade runs against one synthetic pair: buys against
// (eth_reserve, nxm_ceiling), sells against (eth_reserve, nxm_floor). The
// other bound is rescaled with the ETH reserve so its price is unchanged.
// Output is always rounded down, the reserve keeps the dust.

use soroban_sdk::Env;
use ramm_math::{mul_div, mul_div_round_up, RammError};
use ramm_reserves::{project, Context, RammConfig, ReserveState};
use ramm_twap::{update_observations, Observations};
use crate::types::{Quote, SwapResult, Trade};

const BPS: u128 = 10_000;

// ============================================================
// PAIR MATH
// ============================================================

/// Constant-product ETH -> NXM against the ceiling pair
///
/// `state` must already be projected to the trade time.
pub fn swap_eth_for_nxm(env: &Env, state: &ReserveState, eth_in: u128) -> Result<Trade, RammError> {
    if eth_in == 0 {
        return Err(RammError::InvalidInput);
    }

    let eth_reserve = state
        .eth_reserve
        .checked_add(eth_in)
        .ok_or(RammError::ArithmeticOverflow)?;

    // k = eth * nxm_ceiling, new reserve rounded up so output rounds down
    let nxm_ceiling = mul_div_round_up(env, state.eth_reserve, state.nxm_ceiling, eth_reserve)?;
    let amount_out = state.nxm_ceiling - nxm_ceiling;

    let nxm_floor = mul_div_round_up(env, state.nxm_floor, eth_reserve, state.eth_reserve)?;

    Ok(Trade {
        state: ReserveState {
            eth_reserve,
            nxm_ceiling,
            nxm_floor,
            ..state.clone()
        },
        amount_out,
    })
}

/// Constant-product NXM -> ETH against the floor pair
///
/// `state` must already be projected to the trade time.
pub fn swap_nxm_for_eth(env: &Env, state: &ReserveState, nxm_in: u128) -> Result<Trade, RammError> {
    if nxm_in == 0 {
        return Err(RammError::InvalidInput);
    }

    let nxm_floor = state
        .nxm_floor
        .checked_add(nxm_in)
        .ok_or(RammError::ArithmeticOverflow)?;

    let eth_reserve = mul_div_round_up(env, state.eth_reserve, state.nxm_floor, nxm_floor)?;
    let amount_out = state.eth_reserve - eth_reserve;

    let nxm_ceiling = mul_div(env, state.nxm_ceiling, eth_reserve, state.eth_reserve)?;

    Ok(Trade {
        state: ReserveState {
            eth_reserve,
            nxm_ceiling,
            nxm_floor,
            ..state.clone()
        },
        amount_out,
    })
}

// ============================================================
// PUBLIC SWAP FUNCTIONS
// ============================================================

/// Buy NXM with `eth_in` ETH at `now`
///
/// Projects the reserves, brings the observation ring forward and trades
/// against the ceiling. Nothing is persisted here; the caller stores
/// `state` and `observations` from the result.
///
/// # Errors
/// * `InvalidInput` - zero amount, or `now` before the stored state
/// * `SlippageExceeded` - output below `min_nxm_out`
/// * `StaleObservation` - ring out of sync with `state`
pub fn buy(
    env: &Env,
    state: &ReserveState,
    observations: &Observations,
    context: &Context,
    config: &RammConfig,
    eth_in: u128,
    min_nxm_out: u128,
    now: u64,
) -> Result<SwapResult, RammError> {
    if eth_in == 0 {
        return Err(RammError::InvalidInput);
    }

    let projected = project(env, state, context, config, now)?;
    let observations = update_observations(env, state, observations, context, config, now)?;

    let trade = swap_eth_for_nxm(env, &projected, eth_in)?;
    if trade.amount_out < min_nxm_out {
        return Err(RammError::SlippageExceeded);
    }

    Ok(SwapResult {
        amount_in: eth_in,
        amount_out: trade.amount_out,
        state: trade.state,
        observations,
    })
}

/// Sell `nxm_in` NXM for ETH at `now`
///
/// Same flow as `buy`, against the floor.
///
/// # Errors
/// * `InvalidInput` - zero amount, or `now` before the stored state
/// * `SlippageExceeded` - output below `min_eth_out`
/// * `InsufficientCapital` - payout would take capital below the minimum
///   capital requirement
/// * `StaleObservation` - ring out of sync with `state`
pub fn sell(
    env: &Env,
    state: &ReserveState,
    observations: &Observations,
    context: &Context,
    config: &RammConfig,
    nxm_in: u128,
    min_eth_out: u128,
    now: u64,
) -> Result<SwapResult, RammError> {
    if nxm_in == 0 {
        return Err(RammError::InvalidInput);
    }

    let projected = project(env, state, context, config, now)?;
    let observations = update_observations(env, state, observations, context, config, now)?;

    let trade = swap_nxm_for_eth(env, &projected, nxm_in)?;
    if trade.amount_out < min_eth_out {
        return Err(RammError::SlippageExceeded);
    }

    check_capital(context, trade.amount_out)?;

    Ok(SwapResult {
        amount_in: nxm_in,
        amount_out: trade.amount_out,
        state: trade.state,
        observations,
    })
}

// ============================================================
// QUOTES
// ============================================================

/// Simulate a buy at `now` without touching the observation ring
pub fn quote_buy(
    env: &Env,
    state: &ReserveState,
    context: &Context,
    config: &RammConfig,
    eth_in: u128,
    now: u64,
) -> Result<Quote, RammError> {
    let projected = project(env, state, context, config, now)?;
    let trade = swap_eth_for_nxm(env, &projected, eth_in)?;

    // spot output = eth_in / (eth / nxm_ceiling)
    let expected = mul_div(env, eth_in, projected.nxm_ceiling, projected.eth_reserve)?;

    Ok(Quote {
        amount_in: eth_in,
        amount_out: trade.amount_out,
        price_impact_bps: price_impact_bps(env, expected, trade.amount_out)?,
    })
}

/// Simulate a sell at `now` without touching the observation ring
pub fn quote_sell(
    env: &Env,
    state: &ReserveState,
    context: &Context,
    config: &RammConfig,
    nxm_in: u128,
    now: u64,
) -> Result<Quote, RammError> {
    let projected = project(env, state, context, config, now)?;
    let trade = swap_nxm_for_eth(env, &projected, nxm_in)?;
    check_capital(context, trade.amount_out)?;

    // spot output = nxm_in * (eth / nxm_floor)
    let expected = mul_div(env, nxm_in, projected.eth_reserve, projected.nxm_floor)?;

    Ok(Quote {
        amount_in: nxm_in,
        amount_out: trade.amount_out,
        price_impact_bps: price_impact_bps(env, expected, trade.amount_out)?,
    })
}

// ============================================================
// INTERNAL HELPERS
// ============================================================

fn check_capital(context: &Context, eth_out: u128) -> Result<(), RammError> {
    match context.capital.checked_sub(eth_out) {
        Some(remaining) if remaining >= context.min_capital_requirement => Ok(()),
        _ => Err(RammError::InsufficientCapital),
    }
}

/// (expected - actual) / expected in basis points, zero when actual is not
/// below expected
fn price_impact_bps(env: &Env, expected: u128, actual: u128) -> Result<u128, RammError> {
    if expected == 0 || actual >= expected {
        return Ok(0);
    }
    mul_div(env, expected - actual, BPS, expected)
}
