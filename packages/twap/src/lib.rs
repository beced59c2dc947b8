#![no_std]

pub mod types;
pub mod observations;
pub mod price;

pub use types::{Observation, Observations, SpotPrices, TimeTillBookValue, OBSERVATION_SLOTS};
pub use observations::{
    genesis_observations, observe, period_index, slot_for, time_till_book_value,
    update_observations,
};
pub use price::{
    average_prices, book_value, internal_price, projected_internal_price, spot_prices,
};
