use soroban_sdk::contracttype;
use ramm_math::constants::GRANULARITY;

/// Number of slots in the observation ring
pub const OBSERVATION_SLOTS: usize = GRANULARITY as usize;

/// Cumulative price-time integral at a point in time
///
/// Cumulative fields are stored modulo 2^112.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Observation {
    pub timestamp: u64,
    pub price_cumulative_ceiling: u128,
    pub price_cumulative_floor: u128,
}

/// The observation ring, indexed by `ceil(timestamp / PERIOD_SIZE) % GRANULARITY`
pub type Observations = [Observation; OBSERVATION_SLOTS];

/// Instantaneous bound prices, 18 decimals
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpotPrices {
    pub ceiling: u128,
    pub floor: u128,
}

/// Seconds until each bound would reach its buffered book value
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeTillBookValue {
    pub ceiling: u64,
    pub floor: u64,
}
