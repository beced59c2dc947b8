#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env};

// External packages
pub use ramm_math::RammError;
pub use ramm_reserves::{Context, RammConfig, ReserveState};
pub use ramm_swap::Quote;
pub use ramm_twap::{Observation, SpotPrices};

use ramm_math::u256;
use ramm_reserves::project;
use ramm_swap::{buy, quote_buy, quote_sell, sell};
use ramm_twap::{
    book_value, genesis_observations, internal_price, projected_internal_price, spot_prices,
    update_observations, Observations, OBSERVATION_SLOTS,
};

// Local modules
mod events;
mod storage;
pub mod types;

use events::*;
use storage::*;
pub use types::{CircuitBreaker, RammInit};

#[contract]
pub struct Ramm;

#[contractimpl]
impl Ramm {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Activate the RAMM at the current ledger time
    ///
    /// # Arguments
    /// * `admin` - May pause, set circuit breaker limits and remove the budget
    /// * `operator` - Capital pool that trades and syncs, supplies `context`
    /// * `config` - Liquidity and ratchet parameters
    /// * `init` - Opening reserves; ceiling at or above the buffered book value,
    ///   floor at or below it
    /// * `context` - Capital pool values at activation
    pub fn initialize(
        env: Env,
        admin: Address,
        operator: Address,
        config: RammConfig,
        init: RammInit,
        context: Context,
    ) -> Result<(), RammError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(RammError::AlreadyInitialized);
        }

        config.validate()?;

        if init.eth_reserve == 0 || init.nxm_ceiling == 0 || init.nxm_floor == 0 {
            return Err(RammError::InvalidInput);
        }

        let now = env.ledger().timestamp();
        let state = ReserveState {
            eth_reserve: init.eth_reserve,
            nxm_ceiling: init.nxm_ceiling,
            nxm_floor: init.nxm_floor,
            ratchet_speed: init.ratchet_speed,
            liquidity_budget: init.liquidity_budget,
            timestamp: now,
        };

        Self::check_corridor(&env, &state, &context, &config)?;

        write_admin(&env, &admin);
        write_operator(&env, &operator);
        write_config(&env, &config);
        write_state(&env, &state);
        write_observations(&env, &genesis_observations(now));
        write_circuit_breaker(&env, &CircuitBreaker::default());
        write_paused(&env, false);
        set_initialized(&env);

        emit_initialized(&env, &admin, &operator, &init);

        Ok(())
    }

    // ========================================================
    // SWAP FUNCTIONS (Write)
    // ========================================================

    /// Buy NXM with `eth_in` ETH against the ceiling
    ///
    /// # Returns
    /// NXM paid out
    pub fn buy(
        env: Env,
        context: Context,
        eth_in: u128,
        min_nxm_out: u128,
        deadline: u64,
    ) -> Result<u128, RammError> {
        let now = Self::check_swap(&env, deadline)?;
        let (config, state, observations) = Self::load(&env)?;
        extend_settings_ttl(&env);

        let result = buy(
            &env,
            &state,
            &observations,
            &context,
            &config,
            eth_in,
            min_nxm_out,
            now,
        )?;

        let mut breaker = read_circuit_breaker(&env)?;
        breaker.nxm_released = breaker.nxm_released.saturating_add(result.amount_out);
        if breaker.nxm_released > breaker.nxm_limit {
            return Err(RammError::NxmCircuitBreakerHit);
        }

        write_circuit_breaker(&env, &breaker);
        write_state(&env, &result.state);
        write_observations(&env, &result.observations);

        emit_buy(&env, eth_in, result.amount_out, &result.state);

        Ok(result.amount_out)
    }

    /// Sell `nxm_in` NXM for ETH against the floor
    ///
    /// # Returns
    /// ETH paid out
    pub fn sell(
        env: Env,
        context: Context,
        nxm_in: u128,
        min_eth_out: u128,
        deadline: u64,
    ) -> Result<u128, RammError> {
        let now = Self::check_swap(&env, deadline)?;
        let (config, state, observations) = Self::load(&env)?;
        extend_settings_ttl(&env);

        let result = sell(
            &env,
            &state,
            &observations,
            &context,
            &config,
            nxm_in,
            min_eth_out,
            now,
        )?;

        let mut breaker = read_circuit_breaker(&env)?;
        breaker.eth_released = breaker.eth_released.saturating_add(result.amount_out);
        if breaker.eth_released > breaker.eth_limit {
            return Err(RammError::EthCircuitBreakerHit);
        }

        write_circuit_breaker(&env, &breaker);
        write_state(&env, &result.state);
        write_observations(&env, &result.observations);

        emit_sell(&env, nxm_in, result.amount_out, &result.state);

        Ok(result.amount_out)
    }

    /// Project reserves and observations to now, persist them and return
    /// the internal price
    pub fn sync_internal_price(env: Env, context: Context) -> Result<u128, RammError> {
        read_operator(&env)?.require_auth();

        let now = env.ledger().timestamp();
        let (state, observations) = Self::project_to(&env, &context, now)?;
        extend_settings_ttl(&env);
        let price = internal_price(&env, &state, &observations, &context, now)?;

        write_state(&env, &state);
        write_observations(&env, &observations);

        emit_twap_sync(&env, now, price);

        Ok(price)
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        is_paused(&env)
    }

    pub fn get_config(env: Env) -> Result<RammConfig, RammError> {
        read_config(&env)
    }

    pub fn get_circuit_breaker(env: Env) -> Result<CircuitBreaker, RammError> {
        read_circuit_breaker(&env)
    }

    /// Reserves projected to the current ledger time
    pub fn get_reserves(env: Env, context: Context) -> Result<ReserveState, RammError> {
        let now = env.ledger().timestamp();
        let (state, _) = Self::project_to(&env, &context, now)?;
        Ok(state)
    }

    /// Observation slot `index` with the ring projected to the current
    /// ledger time
    pub fn get_observation(env: Env, context: Context, index: u32) -> Result<Observation, RammError> {
        let slot = index as usize;
        if slot >= OBSERVATION_SLOTS {
            return Err(RammError::InvalidInput);
        }

        let now = env.ledger().timestamp();
        let (_, observations) = Self::project_to(&env, &context, now)?;
        Ok(observations[slot].clone())
    }

    /// Spot bound prices of the reserves projected to now
    pub fn get_spot_prices(env: Env, context: Context) -> Result<SpotPrices, RammError> {
        let state = Self::get_reserves(env.clone(), context)?;
        spot_prices(&env, &state)
    }

    /// Internal price at the current ledger time; same value
    /// `sync_internal_price` would return
    pub fn get_internal_price(env: Env, context: Context) -> Result<u128, RammError> {
        let (config, state, observations) = Self::load(&env)?;
        let now = env.ledger().timestamp();
        projected_internal_price(&env, &state, &observations, &context, &config, now)
    }

    pub fn get_book_value(env: Env, context: Context) -> Result<u128, RammError> {
        book_value(&env, &context)
    }

    /// Simulate a buy at the current ledger time
    pub fn quote_buy(env: Env, context: Context, eth_in: u128) -> Result<Quote, RammError> {
        let (config, state, _) = Self::load(&env)?;
        let now = env.ledger().timestamp();
        quote_buy(&env, &state, &context, &config, eth_in, now)
    }

    /// Simulate a sell at the current ledger time
    pub fn quote_sell(env: Env, context: Context, nxm_in: u128) -> Result<Quote, RammError> {
        let (config, state, _) = Self::load(&env)?;
        let now = env.ledger().timestamp();
        quote_sell(&env, &state, &context, &config, nxm_in, now)
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    pub fn set_paused(env: Env, paused: bool) -> Result<(), RammError> {
        read_admin(&env)?.require_auth();
        write_paused(&env, paused);
        emit_paused(&env, paused);
        Ok(())
    }

    /// Replace both release limits; released totals are kept
    pub fn set_circuit_breaker_limits(
        env: Env,
        eth_limit: u128,
        nxm_limit: u128,
    ) -> Result<(), RammError> {
        read_admin(&env)?.require_auth();

        let mut breaker = read_circuit_breaker(&env)?;
        breaker.eth_limit = eth_limit;
        breaker.nxm_limit = nxm_limit;
        write_circuit_breaker(&env, &breaker);

        emit_circuit_breaker_limits(&env, eth_limit, nxm_limit);
        Ok(())
    }

    /// End the launch phase: zero the liquidity budget and switch to the
    /// normal ratchet speed from now on
    pub fn remove_budget(env: Env, context: Context) -> Result<(), RammError> {
        read_admin(&env)?.require_auth();

        let config = read_config(&env)?;
        let now = env.ledger().timestamp();
        let (mut state, observations) = Self::project_to(&env, &context, now)?;
        extend_settings_ttl(&env);

        state.liquidity_budget = 0;
        state.ratchet_speed = config.normal_ratchet_speed;

        write_state(&env, &state);
        write_observations(&env, &observations);

        emit_budget_removed(&env, now, state.ratchet_speed);
        Ok(())
    }
}

// ============================================================
// INTERNAL HELPERS
// ============================================================

impl Ramm {
    fn load(env: &Env) -> Result<(RammConfig, ReserveState, Observations), RammError> {
        Ok((read_config(env)?, read_state(env)?, read_observations(env)?))
    }

    /// Stored reserves and ring, both brought forward to `now`
    fn project_to(
        env: &Env,
        context: &Context,
        now: u64,
    ) -> Result<(ReserveState, Observations), RammError> {
        let (config, state, observations) = Self::load(env)?;
        let observations = update_observations(env, &state, &observations, context, &config, now)?;
        let state = project(env, &state, context, &config, now)?;
        Ok((state, observations))
    }

    /// Ceiling at or above buffered book value, floor at or below it
    ///
    /// Same cross-multiplied comparison the ratchet uses, so an accepted
    /// state is left untouched by a zero-elapsed projection.
    fn check_corridor(
        env: &Env,
        state: &ReserveState,
        context: &Context,
        config: &RammConfig,
    ) -> Result<(), RammError> {
        context.validate()?;

        let eth_supply = u256(env, state.eth_reserve).mul(&u256(env, context.supply));
        let ceiling_bv = u256(env, state.nxm_ceiling)
            .mul(&u256(env, config.buffered_capital_ceiling(env, context.capital)?));
        let floor_bv = u256(env, state.nxm_floor)
            .mul(&u256(env, config.buffered_capital_floor(env, context.capital)?));

        if eth_supply < ceiling_bv || floor_bv < eth_supply {
            return Err(RammError::InvalidInput);
        }

        Ok(())
    }

    /// Operator auth, pause flag and deadline; returns the ledger time
    fn check_swap(env: &Env, deadline: u64) -> Result<u64, RammError> {
        read_operator(env)?.require_auth();

        if is_paused(env) {
            return Err(RammError::SwapPaused);
        }

        let now = env.ledger().timestamp();
        if now > deadline {
            return Err(RammError::SwapExpired);
        }

        Ok(now)
    }
}
