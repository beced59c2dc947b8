#![no_std]

pub mod types;
pub mod liquidity;
pub mod ratchet;
pub mod projector;

pub use types::{Context, RammConfig, ReserveState};
pub use liquidity::{rebalance_liquidity, LiquidityStep};
pub use ratchet::{ratchet_ceiling, ratchet_floor};
pub use projector::project;
