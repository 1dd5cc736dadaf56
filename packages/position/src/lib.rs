// Tidepool Position Package
//
// Pools, positions and their lifecycle: creation from desired token
// amounts, partial and full withdrawal, and reward distribution.

#![no_std]

pub mod bank;
pub mod ids;
pub mod manager;
pub mod pool;
pub mod position;
pub mod rewards;
pub mod types;
pub mod validation;

pub use bank::{send_between_pool_and_user, send_coins, Bank};
pub use ids::{init_id_counters, next_pool_id, next_position_id, peek_next_position_id};
pub use manager::{
    create_position, initialize_initial_position_for_pool, update_position, withdraw_position,
};
pub use pool::{accumulator_name, create_pool, get_pool, set_pool};
pub use position::{
    delete_position, get_position, get_position_liquidity, get_user_positions, has_position,
};
pub use rewards::{add_rewards, claimable_rewards, collect_fees, collect_incentives};
pub use types::{
    CreatePositionResult, LiquidityChange, Pool, PoolPrice, Position, PositionKey, PriceState,
    RewardKind,
};
pub use validation::{validate_amounts, validate_tick_range};
