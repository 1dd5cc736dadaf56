// Tidepool Math Package
//
// Fixed-point decimals, the tick grid, and liquidity formulas.

#![no_std]

pub mod constants;
pub mod dec;
pub mod error;
pub mod liquidity;
pub mod tick_math;

pub use constants::*;
pub use dec::Dec;
pub use error::TidepoolError;

pub use tick_math::{
    min_max_ticks,
    min_spot_price,
    min_spot_price_exponent,
    price_to_tick,
    tick_to_price,
    tick_to_sqrt_price,
    ticks_per_decade,
    ticks_to_sqrt_price,
    validate_exponent_at_price_one,
};

pub use liquidity::{
    calc_actual_amounts,
    calc_amount0_delta,
    calc_amount1_delta,
    effective_sqrt_price,
    get_liquidity_from_amounts,
    liquidity0,
    liquidity1,
};
