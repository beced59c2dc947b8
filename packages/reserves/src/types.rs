// Reserve Types

use soroban_sdk::{contracttype, Env};
use ramm_math::{
    constants::{
        EXTRACT_LIQUIDITY_SPEED, FAST_LIQUIDITY_SPEED, NORMAL_RATCHET_SPEED, PRICE_BUFFER,
        PRICE_BUFFER_DENOMINATOR, SLOW_LIQUIDITY_SPEED, TARGET_LIQUIDITY,
    },
    mul_div, RammError,
};

// ============================================================
// RESERVE STATE
// ============================================================

/// Virtual reserves backing the two price bounds
///
/// Spot ceiling price is `eth_reserve / nxm_ceiling`, spot floor price is
/// `eth_reserve / nxm_floor`. Both share the same ETH reserve.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReserveState {
    /// Tradable ETH reserve
    pub eth_reserve: u128,
    /// NXM reserve of the ceiling (buy side) pair
    pub nxm_ceiling: u128,
    /// NXM reserve of the floor (sell side) pair
    pub nxm_floor: u128,
    /// Bound movement toward book value, basis points per ratchet period
    pub ratchet_speed: u128,
    /// Remaining allowance for fast liquidity injection
    pub liquidity_budget: u128,
    /// Time the reserves were last projected to
    pub timestamp: u64,
}

// ============================================================
// CONTEXT
// ============================================================

/// Values owned by the surrounding capital pool, supplied on every call
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Context {
    /// Pool value in ETH
    pub capital: u128,
    /// Outstanding NXM
    pub supply: u128,
    /// Minimum capital requirement
    pub min_capital_requirement: u128,
}

impl Context {
    pub fn validate(&self) -> Result<(), RammError> {
        if self.capital == 0 || self.supply == 0 {
            return Err(RammError::InvalidInput);
        }
        Ok(())
    }
}

// ============================================================
// CONFIGURATION
// ============================================================

/// Tunable parameters fixed at activation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RammConfig {
    /// ETH reserve the liquidity schedule steers toward
    pub target_liquidity: u128,
    /// Injection per LIQ_SPEED_PERIOD while the budget lasts
    pub fast_liquidity_speed: u128,
    /// Injection per LIQ_SPEED_PERIOD after the budget is spent
    pub slow_liquidity_speed: u128,
    /// Extraction per LIQ_SPEED_PERIOD above target
    pub extract_liquidity_speed: u128,
    /// Gap kept between each bound and book value, basis points
    pub price_buffer: u128,
    /// Ratchet speed installed when the budget is removed
    pub normal_ratchet_speed: u128,
}

impl Default for RammConfig {
    fn default() -> Self {
        Self {
            target_liquidity: TARGET_LIQUIDITY,
            fast_liquidity_speed: FAST_LIQUIDITY_SPEED,
            slow_liquidity_speed: SLOW_LIQUIDITY_SPEED,
            extract_liquidity_speed: EXTRACT_LIQUIDITY_SPEED,
            price_buffer: PRICE_BUFFER,
            normal_ratchet_speed: NORMAL_RATCHET_SPEED,
        }
    }
}

impl RammConfig {
    pub fn validate(&self) -> Result<(), RammError> {
        if self.target_liquidity == 0
            || self.fast_liquidity_speed == 0
            || self.slow_liquidity_speed == 0
            || self.extract_liquidity_speed == 0
        {
            return Err(RammError::InvalidConfig);
        }

        if self.price_buffer >= PRICE_BUFFER_DENOMINATOR {
            return Err(RammError::InvalidConfig);
        }

        Ok(())
    }

    /// Capital scaled up by the price buffer; ceiling never prices below
    /// `buffered_capital_ceiling / supply`
    pub fn buffered_capital_ceiling(&self, env: &Env, capital: u128) -> Result<u128, RammError> {
        mul_div(
            env,
            capital,
            PRICE_BUFFER_DENOMINATOR + self.price_buffer,
            PRICE_BUFFER_DENOMINATOR,
        )
    }

    /// Capital scaled down by the price buffer; floor never prices above
    /// `buffered_capital_floor / supply`
    pub fn buffered_capital_floor(&self, env: &Env, capital: u128) -> Result<u128, RammError> {
        mul_div(
            env,
            capital,
            PRICE_BUFFER_DENOMINATOR - self.price_buffer,
            PRICE_BUFFER_DENOMINATOR,
        )
    }
}
