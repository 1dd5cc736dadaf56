//! Manager events

use soroban_sdk::{Address, Env, Map, Symbol};
use tidepool_position::{LiquidityChange, Pool, RewardKind};

/// Emitted when the manager is initialized
pub fn emit_initialized(env: &Env, admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "ManagerInit"),),
        (admin.clone(),),
    );
}

pub fn emit_pool_created(env: &Env, pool: &Pool) {
    env.events().publish(
        (Symbol::new(env, "PoolCreated"),),
        (
            pool.id,
            pool.token0.clone(),
            pool.token1.clone(),
            pool.tick_spacing,
            pool.exponent_at_price_one,
        ),
    );
}

/// Emitted when a position is opened
pub fn emit_position_created(env: &Env, change: &LiquidityChange) {
    publish_liquidity_change(env, "PositionCreated", change);
}

/// Emitted when liquidity is withdrawn from a position
pub fn emit_position_withdrawn(env: &Env, change: &LiquidityChange) {
    publish_liquidity_change(env, "PositionWithdrawn", change);
}

fn publish_liquidity_change(env: &Env, name: &str, change: &LiquidityChange) {
    env.events().publish(
        (Symbol::new(env, name), change.pool_id),
        (
            change.position_id,
            change.owner.clone(),
            change.lower_tick,
            change.upper_tick,
            change.join_time,
            change.liquidity_delta,
            change.amount0,
            change.amount1,
        ),
    );
}

/// Emitted when fees or incentives are paid to a position owner
pub fn emit_rewards_collected(
    env: &Env,
    kind: RewardKind,
    position_id: u64,
    owner: &Address,
    paid: &Map<Address, i128>,
) {
    env.events().publish(
        (Symbol::new(env, "RewardsCollected"), position_id),
        (kind, owner.clone(), paid.clone()),
    );
}

/// Emitted when rewards are added to a pool accumulator
pub fn emit_rewards_added(
    env: &Env,
    pool_id: u64,
    kind: RewardKind,
    token: &Address,
    amount: i128,
) {
    env.events().publish(
        (Symbol::new(env, "RewardsAdded"), pool_id),
        (kind, token.clone(), amount),
    );
}
