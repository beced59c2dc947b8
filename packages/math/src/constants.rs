// RAMM constants
//
// Grouped by the part of the system that consumes them. Amounts are
// 18-decimal fixed point, durations are seconds.

// ============================================================
// FIXED POINT
// ============================================================

/// 1.0 in 18-decimal fixed point
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Cumulative prices wrap at 2^112
pub const CUMULATIVE_BITS: u32 = 112;

/// Mask that reduces a value modulo 2^112
pub const CUMULATIVE_MASK: u128 = (1u128 << CUMULATIVE_BITS) - 1;

// ============================================================
// LIQUIDITY SCHEDULE
// ============================================================

/// Liquidity speeds are expressed per this many seconds (1 day)
pub const LIQ_SPEED_PERIOD: u64 = 86_400;

/// Steady-state goal for the ETH reserve
pub const TARGET_LIQUIDITY: u128 = 5_000 * WAD;

/// Injection speed while the liquidity budget lasts
pub const FAST_LIQUIDITY_SPEED: u128 = 1_500 * WAD;

/// Injection speed once the budget is exhausted
pub const SLOW_LIQUIDITY_SPEED: u128 = 100 * WAD;

/// Extraction speed when the reserve sits above target
pub const EXTRACT_LIQUIDITY_SPEED: u128 = 100 * WAD;

// ============================================================
// RATCHET
// ============================================================

/// Ratchet speeds are expressed per this many seconds (1 day)
pub const RATCHET_PERIOD: u64 = 86_400;

/// Ratchet speed denominator (basis points of book value)
pub const RATCHET_DENOMINATOR: u128 = 10_000;

/// Ratchet speed used at launch, while the budget is live
pub const FAST_RATCHET_SPEED: u128 = 5_000;

/// Ratchet speed once the budget has been removed
pub const NORMAL_RATCHET_SPEED: u128 = 400;

/// Distance kept between each bound and book value (1%)
pub const PRICE_BUFFER: u128 = 100;

/// Price buffer denominator (basis points)
pub const PRICE_BUFFER_DENOMINATOR: u128 = 10_000;

// ============================================================
// TWAP
// ============================================================

/// Number of observation slots in the ring
pub const GRANULARITY: u64 = 3;

/// Length of one observation period (3 days)
pub const PERIOD_SIZE: u64 = 259_200;
