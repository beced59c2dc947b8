#![no_std]

pub mod types;
pub mod engine;

// Re-export types
pub use types::{Quote, SwapResult, Trade};

// Re-export engine functions
pub use engine::{buy, quote_buy, quote_sell, sell, swap_eth_for_nxm, swap_nxm_for_eth};
