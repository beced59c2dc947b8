use soroban_sdk::contracttype;
use ramm_reserves::ReserveState;
use ramm_twap::Observations;

/// Reserves after a single trade, before anything is persisted
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Trade {
    pub state: ReserveState,
    pub amount_out: u128,
}

/// Everything a buy or sell hands back for persistence
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapResult {
    pub amount_in: u128,
    pub amount_out: u128,
    pub state: ReserveState,
    pub observations: Observations,
}

/// Read-only trade simulation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quote {
    pub amount_in: u128,
    pub amount_out: u128,
    /// Shortfall against the spot-price output, basis points
    pub price_impact_bps: u128,
}

