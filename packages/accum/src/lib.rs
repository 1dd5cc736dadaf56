// Tidepool Accumulator Package
//
// Value-per-share ledgers used to distribute fees and incentives to
// positions in proportion to their shares, without iterating positions.

#![no_std]

pub mod accumulator;
pub mod coins;
pub mod types;

pub use accumulator::{
    get_accumulator, init_or_update_position, make_accumulator, rewards_since,
    validate_accumulator_value,
};
pub use coins::{Coins, DecCoins};
pub use types::{AccumKey, AccumName, AccumulatorObject, Record};
