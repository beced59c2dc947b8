// RAMM Math Package

#![no_std]

pub mod constants;
pub mod cumulative;
pub mod error;
pub mod wad;

// Re-export commonly used items from constants
pub use constants::*;

pub use error::RammError;

pub use cumulative::{add_cumulative, cumulative_delta, wrap_cumulative};

pub use wad::{mul_div, mul_div_round_up, to_u128, u256, wad_div};
