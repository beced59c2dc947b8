// RAMM storage module

use soroban_sdk::{Address, Env};
use ramm_math::RammError;
use ramm_reserves::{RammConfig, ReserveState};
use ramm_twap::{Observation, Observations};

use crate::types::{CircuitBreaker, RammDataKey};

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// TTL bump threshold
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &RammDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

fn write<V>(env: &Env, key: &RammDataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    extend_ttl(env, key);
}

fn read<V>(env: &Env, key: &RammDataKey) -> Result<V, RammError>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    env.storage()
        .persistent()
        .get(key)
        .ok_or(RammError::NotInitialized)
}

/// Keep the entries mutating calls read but never rewrite alive
pub fn extend_settings_ttl(env: &Env) {
    for key in [
        RammDataKey::Initialized,
        RammDataKey::Config,
        RammDataKey::Admin,
        RammDataKey::Operator,
        RammDataKey::Paused,
    ] {
        extend_ttl(env, &key);
    }
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&RammDataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    write(env, &RammDataKey::Initialized, &true);
}

// ============================================================
// ROLES
// ============================================================

pub fn write_admin(env: &Env, admin: &Address) {
    write(env, &RammDataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, RammError> {
    read(env, &RammDataKey::Admin)
}

pub fn write_operator(env: &Env, operator: &Address) {
    write(env, &RammDataKey::Operator, operator);
}

pub fn read_operator(env: &Env) -> Result<Address, RammError> {
    read(env, &RammDataKey::Operator)
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &RammConfig) {
    write(env, &RammDataKey::Config, config);
}

pub fn read_config(env: &Env) -> Result<RammConfig, RammError> {
    read(env, &RammDataKey::Config)
}

// ============================================================
// RESERVES & OBSERVATIONS
// ============================================================

pub fn write_state(env: &Env, state: &ReserveState) {
    write(env, &RammDataKey::State, state);
}

pub fn read_state(env: &Env) -> Result<ReserveState, RammError> {
    read(env, &RammDataKey::State)
}

pub fn write_observations(env: &Env, observations: &Observations) {
    for (slot, observation) in observations.iter().enumerate() {
        write(env, &RammDataKey::Observation(slot as u32), observation);
    }
}

pub fn read_observations(env: &Env) -> Result<Observations, RammError> {
    let slot = |index: u32| -> Result<Observation, RammError> {
        read(env, &RammDataKey::Observation(index))
    };
    Ok([slot(0)?, slot(1)?, slot(2)?])
}

// ============================================================
// CIRCUIT BREAKER & PAUSE
// ============================================================

pub fn write_circuit_breaker(env: &Env, breaker: &CircuitBreaker) {
    write(env, &RammDataKey::CircuitBreaker, breaker);
}

pub fn read_circuit_breaker(env: &Env) -> Result<CircuitBreaker, RammError> {
    read(env, &RammDataKey::CircuitBreaker)
}

pub fn write_paused(env: &Env, paused: bool) {
    write(env, &RammDataKey::Paused, &paused);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&RammDataKey::Paused)
        .unwrap_or(false)
}
