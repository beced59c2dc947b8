// TWAP observation ring
//
// One slot per PERIOD_SIZE window, GRANULARITY slots in total. The slot
// holding the newest observation is rewritten on every update inside its
// period; once the clock crosses into a new period the next slot takes over
// and the oldest one becomes the averaging reference.

use soroban_sdk::{Env, U256};
use ramm_math::{
    add_cumulative,
    constants::{GRANULARITY, PERIOD_SIZE, RATCHET_DENOMINATOR, RATCHET_PERIOD},
    u256, wad_div, RammError,
};
use ramm_reserves::{project, Context, RammConfig, ReserveState};
use crate::price::spot_prices;
use crate::types::{Observation, Observations, TimeTillBookValue};

/// 1-based period index: timestamps in ((i-1)*P, i*P] belong to period i
#[inline]
pub fn period_index(timestamp: u64) -> u64 {
    timestamp.div_ceil(PERIOD_SIZE)
}

/// Ring slot for a timestamp
#[inline]
pub fn slot_for(timestamp: u64) -> usize {
    (period_index(timestamp) % GRANULARITY) as usize
}

/// Ring written at activation: three copies of `{ timestamp, 0, 0 }`
pub fn genesis_observations(timestamp: u64) -> Observations {
    core::array::from_fn(|_| Observation {
        timestamp,
        price_cumulative_ceiling: 0,
        price_cumulative_floor: 0,
    })
}

/// How long each bound keeps ratcheting before it meets buffered book value
///
/// Derived from `state` alone: the bound price moves linearly at
/// `capital * ratchet_speed / (supply * RATCHET_PERIOD * RATCHET_DENOMINATOR)`
/// per second, so the distance to the buffered book value divided by that
/// rate is the time left. Zero once the bound sits on book value, `u64::MAX`
/// when the ratchet is stopped.
pub fn time_till_book_value(
    env: &Env,
    state: &ReserveState,
    context: &Context,
    config: &RammConfig,
) -> Result<TimeTillBookValue, RammError> {
    let scale = u256(env, RATCHET_PERIOD as u128 * RATCHET_DENOMINATOR);
    let eth_supply = u256(env, state.eth_reserve).mul(&u256(env, context.supply));

    let capital_ceiling = config.buffered_capital_ceiling(env, context.capital)?;
    let capital_floor = config.buffered_capital_floor(env, context.capital)?;
    let ceiling_bv = u256(env, state.nxm_ceiling).mul(&u256(env, capital_ceiling));
    let floor_bv = u256(env, state.nxm_floor).mul(&u256(env, capital_floor));

    let seconds = |distance: U256, nxm: u128| -> u64 {
        if state.ratchet_speed == 0 || nxm == 0 {
            return u64::MAX;
        }
        let rate = u256(env, context.capital)
            .mul(&u256(env, nxm))
            .mul(&u256(env, state.ratchet_speed));
        distance
            .mul(&scale)
            .div(&rate)
            .to_u128()
            .and_then(|time| u64::try_from(time).ok())
            .unwrap_or(u64::MAX)
    };

    let ceiling = if eth_supply > ceiling_bv {
        seconds(eth_supply.sub(&ceiling_bv), state.nxm_ceiling)
    } else {
        0
    };

    let floor = if floor_bv > eth_supply {
        seconds(floor_bv.sub(&eth_supply), state.nxm_floor)
    } else {
        0
    };

    Ok(TimeTillBookValue { ceiling, floor })
}

/// Price-time area of one bound over `elapsed` seconds
///
/// The ratcheting stretch is a straight line from `start_price` to
/// `end_price` (trapezoid); whatever remains is spent flat at book value.
fn bound_contribution(
    start_price: u128,
    end_price: u128,
    book_value_price: u128,
    elapsed: u64,
    time_till_book_value: u64,
) -> Result<u128, RammError> {
    let on_ratchet = elapsed.min(time_till_book_value);
    let on_book_value = elapsed - on_ratchet;

    let ratchet_area = start_price
        .checked_add(end_price)
        .and_then(|sum| sum.checked_mul(on_ratchet as u128))
        .map(|area| area / 2)
        .ok_or(RammError::ArithmeticOverflow)?;

    let book_value_area = book_value_price
        .checked_mul(on_book_value as u128)
        .ok_or(RammError::ArithmeticOverflow)?;

    ratchet_area
        .checked_add(book_value_area)
        .ok_or(RammError::ArithmeticOverflow)
}

/// Extend `previous_observation` from `previous_state` to `state`
///
/// `state` must be `previous_state` projected to `state.timestamp`.
pub fn observe(
    env: &Env,
    previous_state: &ReserveState,
    state: &ReserveState,
    previous_observation: &Observation,
    context: &Context,
    config: &RammConfig,
) -> Result<Observation, RammError> {
    let elapsed = state
        .timestamp
        .checked_sub(previous_state.timestamp)
        .ok_or(RammError::InvalidInput)?;

    let till = time_till_book_value(env, previous_state, context, config)?;
    let start = spot_prices(env, previous_state)?;
    let end = spot_prices(env, state)?;

    let bv_ceiling = wad_div(
        env,
        config.buffered_capital_ceiling(env, context.capital)?,
        context.supply,
    )?;
    let bv_floor = wad_div(
        env,
        config.buffered_capital_floor(env, context.capital)?,
        context.supply,
    )?;

    let ceiling = bound_contribution(start.ceiling, end.ceiling, bv_ceiling, elapsed, till.ceiling)?;
    let floor = bound_contribution(start.floor, end.floor, bv_floor, elapsed, till.floor)?;

    Ok(Observation {
        timestamp: state.timestamp,
        price_cumulative_ceiling: add_cumulative(previous_observation.price_cumulative_ceiling, ceiling),
        price_cumulative_floor: add_cumulative(previous_observation.price_cumulative_floor, floor),
    })
}

/// Bring the observation ring forward from `previous_state.timestamp` to
/// `target_time`
///
/// One observation is written per period boundary crossed, plus one at
/// `target_time`. Only the last GRANULARITY periods can survive in the ring,
/// so a gap longer than that is folded into a single step ending at the
/// first boundary that is still kept; older periods are never back-filled.
///
/// # Errors
/// * `InvalidInput` - `target_time` is before the previous state
/// * `StaleObservation` - the ring's newest entry does not match the
///   previous state's timestamp
pub fn update_observations(
    env: &Env,
    previous_state: &ReserveState,
    previous_observations: &Observations,
    context: &Context,
    config: &RammConfig,
    target_time: u64,
) -> Result<Observations, RammError> {
    if target_time < previous_state.timestamp {
        return Err(RammError::InvalidInput);
    }

    let previous_index = period_index(previous_state.timestamp);
    let end_index = period_index(target_time);

    let mut last_slot = (previous_index % GRANULARITY) as usize;
    if previous_observations[last_slot].timestamp != previous_state.timestamp {
        return Err(RammError::StaleObservation);
    }

    let first_index = previous_index.max(end_index.saturating_sub(GRANULARITY - 1));

    let mut observations = previous_observations.clone();
    let mut state = previous_state.clone();

    for index in first_index..=end_index {
        let boundary = index
            .checked_mul(PERIOD_SIZE)
            .ok_or(RammError::ArithmeticOverflow)?
            .min(target_time);

        let next_state = project(env, &state, context, config, boundary)?;
        let observation = observe(env, &state, &next_state, &observations[last_slot], context, config)?;

        let slot = (index % GRANULARITY) as usize;
        observations[slot] = observation;
        last_slot = slot;
        state = next_state;
    }

    Ok(observations)
}
