use soroban_sdk::{contracttype, Address};
use tidepool_math::Dec;

/// Pool price once the first position has been created
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceState {
    pub sqrt_price: Dec,
    pub tick: i64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PoolPrice {
    Uninitialized,
    Initialized(PriceState),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub id: u64,
    /// Account holding the pool's tokens
    pub address: Address,
    pub token0: Address,
    pub token1: Address,
    pub tick_spacing: u64,
    pub exponent_at_price_one: i32,
    pub price: PoolPrice,
    /// Liquidity of positions whose range contains the current tick
    pub liquidity: Dec,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub id: u64,
    pub pool_id: u64,
    pub owner: Address,
    pub lower_tick: i64,
    pub upper_tick: i64,
    pub liquidity: Dec,
    pub join_time: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RewardKind {
    Fee,
    Incentive,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreatePositionResult {
    pub position_id: u64,
    pub amount0: i128,
    pub amount1: i128,
    pub liquidity: Dec,
    pub join_time: u64,
}

/// Record of a position's liquidity change, for event emission
///
/// Amounts carry the sign of the change: positive when deposited,
/// negative when paid out.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityChange {
    pub position_id: u64,
    pub owner: Address,
    pub pool_id: u64,
    pub lower_tick: i64,
    pub upper_tick: i64,
    pub join_time: u64,
    pub liquidity_delta: Dec,
    pub amount0: i128,
    pub amount1: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PositionKey {
    Pool(u64),
    Position(u64),
    /// Position ids held by an owner
    OwnerPositions(Address),
    NextPoolId,
    NextPositionId,
}
