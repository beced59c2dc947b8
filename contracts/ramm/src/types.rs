use soroban_sdk::contracttype;

// ============================================================
// ACTIVATION
// ============================================================

/// Opening reserves supplied to `initialize`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RammInit {
    pub eth_reserve: u128,
    pub nxm_ceiling: u128,
    pub nxm_floor: u128,
    pub liquidity_budget: u128,
    pub ratchet_speed: u128,
}

// ============================================================
// CIRCUIT BREAKER
// ============================================================

/// Running totals released by trades, with admin-set ceilings
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CircuitBreaker {
    /// ETH paid out by sells
    pub eth_released: u128,
    /// NXM paid out by buys
    pub nxm_released: u128,
    pub eth_limit: u128,
    pub nxm_limit: u128,
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self {
            eth_released: 0,
            nxm_released: 0,
            eth_limit: u128::MAX,
            nxm_limit: u128::MAX,
        }
    }
}

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum RammDataKey {
    /// Initialization flag
    Initialized,
    /// Tunable parameters fixed at activation
    Config,
    /// May pause, set limits and remove the budget
    Admin,
    /// May trade and sync on behalf of the capital pool
    Operator,
    /// Reserves as of their last projection
    State,
    /// Observation ring slot (0..GRANULARITY)
    Observation(u32),
    /// Released totals and limits
    CircuitBreaker,
    /// Swap pause flag
    Paused,
}
