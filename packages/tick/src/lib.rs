#![no_std]

pub mod types;
pub mod update;

pub use types::{TickInfo, TickKey};
pub use update::{get_liquidity_gross, get_liquidity_net, get_tick_info, init_or_update_tick};
