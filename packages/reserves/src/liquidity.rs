// Two-speed liquidity schedule

use soroban_sdk::Env;
use ramm_math::{constants::LIQ_SPEED_PERIOD, mul_div, RammError};
use crate::types::RammConfig;

/// ETH reserve and remaining budget after the liquidity step
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityStep {
    pub eth_reserve: u128,
    pub liquidity_budget: u128,
}

/// Move the ETH reserve toward target over `elapsed` seconds
///
/// Below target the reserve is topped up at the fast speed while the budget
/// lasts and at the slow speed afterwards. Above target it is drained at the
/// extract speed. Either way the reserve stops at target.
pub fn rebalance_liquidity(
    env: &Env,
    eth_reserve: u128,
    liquidity_budget: u128,
    config: &RammConfig,
    elapsed: u64,
) -> Result<LiquidityStep, RammError> {
    let period = LIQ_SPEED_PERIOD as u128;
    let elapsed = elapsed as u128;

    if eth_reserve < config.target_liquidity {
        let room = config.target_liquidity - eth_reserve;

        let time_left_on_budget =
            mul_div(env, liquidity_budget, period, config.fast_liquidity_speed)?;

        let max_injected = if elapsed > time_left_on_budget {
            let slow = mul_div(
                env,
                elapsed - time_left_on_budget,
                config.slow_liquidity_speed,
                period,
            )?;
            liquidity_budget
                .checked_add(slow)
                .ok_or(RammError::ArithmeticOverflow)?
        } else {
            mul_div(env, elapsed, config.fast_liquidity_speed, period)?
        };

        let injected = max_injected.min(room);

        return Ok(LiquidityStep {
            eth_reserve: eth_reserve + injected,
            liquidity_budget: liquidity_budget.saturating_sub(injected),
        });
    }

    let excess = eth_reserve - config.target_liquidity;
    let extracted = mul_div(env, elapsed, config.extract_liquidity_speed, period)?.min(excess);

    Ok(LiquidityStep {
        eth_reserve: eth_reserve - extracted,
        liquidity_budget,
    })
}
