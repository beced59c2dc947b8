// Modulo-2^112 accumulator arithmetic
//
// Cumulative prices are stored reduced modulo 2^112. Overflow here is the
// expected steady state, not an error: readers only ever look at the
// difference between two values taken less than one wrap apart.

use crate::constants::CUMULATIVE_MASK;

/// Reduce a value into the accumulator range
#[inline]
pub fn wrap_cumulative(value: u128) -> u128 {
    value & CUMULATIVE_MASK
}

/// Add a contribution to an accumulator, wrapping at 2^112
#[inline]
pub fn add_cumulative(accumulator: u128, contribution: u128) -> u128 {
    // both operands < 2^112, the sum cannot overflow u128
    wrap_cumulative(wrap_cumulative(accumulator) + wrap_cumulative(contribution))
}

/// Distance from `older` to `newer` on the 2^112 circle
#[inline]
pub fn cumulative_delta(newer: u128, older: u128) -> u128 {
    wrap_cumulative(wrap_cumulative(newer).wrapping_sub(wrap_cumulative(older)))
}
