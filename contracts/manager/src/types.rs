// Contract parameter types

use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreatePoolParams {
    pub token0: Address,
    pub token1: Address,
    pub tick_spacing: u64,
    pub exponent_at_price_one: i32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreatePositionParams {
    pub pool_id: u64,
    pub amount0_desired: i128,
    pub amount1_desired: i128,
    pub amount0_min: i128,
    pub amount1_min: i128,
    pub lower_tick: i64,
    pub upper_tick: i64,
}
