// Internal price
//
// Reported price blends the spot bounds with their TWAPs: the ceiling takes
// the lower of spot and average, the floor the higher, so the result is never
// more aggressive than either measure alone.

use soroban_sdk::Env;
use ramm_math::{cumulative_delta, wad_div, RammError};
use ramm_reserves::{project, Context, RammConfig, ReserveState};
use crate::observations::{slot_for, update_observations};
use crate::types::{Observations, SpotPrices, OBSERVATION_SLOTS};

/// capital / supply, 18 decimals
pub fn book_value(env: &Env, context: &Context) -> Result<u128, RammError> {
    context.validate()?;
    wad_div(env, context.capital, context.supply)
}

/// Instantaneous bound prices of `state`
pub fn spot_prices(env: &Env, state: &ReserveState) -> Result<SpotPrices, RammError> {
    Ok(SpotPrices {
        ceiling: wad_div(env, state.eth_reserve, state.nxm_ceiling)?,
        floor: wad_div(env, state.eth_reserve, state.nxm_floor)?,
    })
}

/// Time-weighted average bound prices over the ring's window ending at `now`
pub fn average_prices(observations: &Observations, now: u64) -> Result<SpotPrices, RammError> {
    let current = &observations[slot_for(now)];
    let reference = &observations[(slot_for(now) + 1) % OBSERVATION_SLOTS];

    if current.timestamp != now {
        return Err(RammError::StaleObservation);
    }

    let elapsed = match now.checked_sub(reference.timestamp) {
        Some(elapsed) if elapsed > 0 => elapsed as u128,
        _ => return Err(RammError::StaleObservation),
    };

    Ok(SpotPrices {
        ceiling: cumulative_delta(current.price_cumulative_ceiling, reference.price_cumulative_ceiling)
            / elapsed,
        floor: cumulative_delta(current.price_cumulative_floor, reference.price_cumulative_floor)
            / elapsed,
    })
}

/// Internal price from a state and ring already brought forward to `now`
///
/// `min(spot, avg)` ceiling plus `max(spot, avg)` floor, minus book value.
///
/// # Errors
/// * `StaleObservation` - the ring does not end at `now`, or its window is
///   empty
pub fn internal_price(
    env: &Env,
    state: &ReserveState,
    observations: &Observations,
    context: &Context,
    now: u64,
) -> Result<u128, RammError> {
    let spot = spot_prices(env, state)?;
    let average = average_prices(observations, now)?;
    let book_value = book_value(env, context)?;

    let ceiling = spot.ceiling.min(average.ceiling);
    let floor = spot.floor.max(average.floor);

    ceiling
        .checked_add(floor)
        .and_then(|sum| sum.checked_sub(book_value))
        .ok_or(RammError::ArithmeticOverflow)
}

/// Project state and ring to `now`, then price
///
/// Read-only; yields the same number a mutating call at `now` would persist.
pub fn projected_internal_price(
    env: &Env,
    state: &ReserveState,
    observations: &Observations,
    context: &Context,
    config: &RammConfig,
    now: u64,
) -> Result<u128, RammError> {
    let projected = project(env, state, context, config, now)?;
    let updated = update_observations(env, state, observations, context, config, now)?;
    internal_price(env, &projected, &updated, context, now)
}
