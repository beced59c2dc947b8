// SPDX-License-Identifier: MIT
// 18-Decimal Fixed-Point Arithmetic

use soroban_sdk::{Env, U256};
use crate::constants::WAD;
use crate::error::RammError;

/// Lift a u128 into the host's 256-bit integer
#[inline]
pub fn u256(env: &Env, x: u128) -> U256 {
    U256::from_u128(env, x)
}

/// Narrow a 256-bit intermediate back to u128
#[inline]
pub fn to_u128(x: &U256) -> Result<u128, RammError> {
    x.to_u128().ok_or(RammError::ArithmeticOverflow)
}

/// Safe multiply-divide using U256 to prevent overflow
/// Calculates: floor((a * b) / denominator)
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, RammError> {
    if denominator == 0 {
        return Err(RammError::ArithmeticOverflow);
    }

    let product = u256(env, a).mul(&u256(env, b));
    to_u128(&product.div(&u256(env, denominator)))
}

/// Same as `mul_div` but rounds the quotient up
pub fn mul_div_round_up(
    env: &Env,
    a: u128,
    b: u128,
    denominator: u128,
) -> Result<u128, RammError> {
    if denominator == 0 {
        return Err(RammError::ArithmeticOverflow);
    }

    let den = u256(env, denominator);
    let product = u256(env, a).mul(&u256(env, b));
    let quotient = to_u128(&product.div(&den))?;

    if product.rem_euclid(&den) != U256::from_u32(env, 0) {
        quotient.checked_add(1).ok_or(RammError::ArithmeticOverflow)
    } else {
        Ok(quotient)
    }
}

/// Price of one token in reserve units: WAD * numerator / denominator
#[inline]
pub fn wad_div(env: &Env, numerator: u128, denominator: u128) -> Result<u128, RammError> {
    mul_div(env, WAD, numerator, denominator)
}
