// RAMM error codes
//
// One contracterror enum shared by the math packages and the contract so a
// failure deep inside a projection surfaces to the caller unchanged.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RammError {
    // Lifecycle errors (100-199)
    /// Contract has already been initialized
    AlreadyInitialized = 100,
    /// Contract has not been initialized
    NotInitialized = 101,
    /// Configuration rejected by validation
    InvalidConfig = 102,

    // Input errors (200-299)
    /// Zero amount, zero capital/supply, or time moving backwards
    InvalidInput = 200,
    /// Deadline already passed
    SwapExpired = 201,
    /// Swaps are paused
    SwapPaused = 202,

    // Trade errors (300-399)
    /// Output below the caller's minimum
    SlippageExceeded = 300,
    /// Sell would take capital below the minimum capital requirement
    InsufficientCapital = 301,
    /// Cumulative ETH released exceeds the configured limit
    EthCircuitBreakerHit = 302,
    /// Cumulative NXM released exceeds the configured limit
    NxmCircuitBreakerHit = 303,

    // Oracle errors (400-499)
    /// Empty TWAP window or observation ring out of sync with the state
    StaleObservation = 400,

    // Math errors (700-799)
    /// Result does not fit or a divisor is zero
    ArithmeticOverflow = 700,
}
