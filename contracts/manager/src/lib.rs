#![no_std]

//! # Tidepool Position Manager
//!
//! Concentrated-liquidity positions over admin-created pools.
//!
//! ## Responsibilities:
//! 1. Pool registry (token pair, tick spacing, grid granularity)
//! 2. Position creation from desired amounts, with slippage minimums
//! 3. Partial and full withdrawal
//! 4. Fee and incentive distribution through per-pool accumulators
//!
//! Tokens are held by this contract on behalf of every pool.

use soroban_sdk::{contract, contractimpl, log, Address, Env, Map, Vec};

mod bank;
mod events;
mod storage;
mod types;

use bank::TokenBank;
use events::*;
use storage::*;
pub use types::*;

pub use tidepool_accum::AccumulatorObject;
pub use tidepool_math::{Dec, TidepoolError};
pub use tidepool_position::{CreatePositionResult, Pool, PoolPrice, Position, PriceState, RewardKind};
pub use tidepool_tick::TickInfo;

use tidepool_position::accumulator_name;
use tidepool_store::PersistentStore;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct TidepoolManager;

#[contractimpl]
impl TidepoolManager {
    // ========================================================
    // ADMIN
    // ========================================================

    /// Initialize the manager and seed the pool and position id counters
    pub fn initialize(env: Env, admin: Address) -> Result<(), TidepoolError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(TidepoolError::AlreadyInitialized);
        }

        let mut store = PersistentStore::new(&env);
        tidepool_position::init_id_counters(&mut store)?;

        write_admin(&env, &admin);
        set_initialized(&env);

        emit_initialized(&env, &admin);
        Ok(())
    }

    /// Register a pool; its price is set by the first position
    pub fn create_pool(env: Env, params: CreatePoolParams) -> Result<u64, TidepoolError> {
        require_initialized(&env)?;
        read_admin(&env)?.require_auth();

        let mut store = PersistentStore::new(&env);
        let pool = tidepool_position::create_pool(
            &mut store,
            &env.current_contract_address(),
            &params.token0,
            &params.token1,
            params.tick_spacing,
            params.exponent_at_price_one,
        )?;

        emit_pool_created(&env, &pool);
        log!(&env, "pool created", pool.id);

        Ok(pool.id)
    }

    // ========================================================
    // POSITIONS
    // ========================================================

    /// Open a position; `owner` pays the token amounts the liquidity needs
    pub fn create_position(
        env: Env,
        owner: Address,
        params: CreatePositionParams,
    ) -> Result<CreatePositionResult, TidepoolError> {
        owner.require_auth();
        require_initialized(&env)?;

        let mut store = PersistentStore::new(&env);
        let mut bank = TokenBank::new(&env);

        let (result, change) = tidepool_position::create_position(
            &mut store,
            &mut bank,
            params.pool_id,
            &owner,
            params.amount0_desired,
            params.amount1_desired,
            params.amount0_min,
            params.amount1_min,
            params.lower_tick,
            params.upper_tick,
            env.ledger().timestamp(),
        )?;

        emit_position_created(&env, &change);
        log!(&env, "position created", result.position_id, result.amount0, result.amount1);

        Ok(result)
    }

    /// Withdraw `liquidity` from a position; returns (amount0, amount1) paid
    pub fn withdraw_position(
        env: Env,
        owner: Address,
        position_id: u64,
        liquidity: Dec,
    ) -> Result<(i128, i128), TidepoolError> {
        owner.require_auth();
        require_initialized(&env)?;

        let mut store = PersistentStore::new(&env);
        let mut bank = TokenBank::new(&env);

        let (amounts, change) =
            tidepool_position::withdraw_position(&mut store, &mut bank, &owner, position_id, liquidity)?;

        emit_position_withdrawn(&env, &change);
        Ok(amounts)
    }

    // ========================================================
    // REWARDS
    // ========================================================

    pub fn collect_fees(env: Env, owner: Address, position_id: u64) -> Result<Map<Address, i128>, TidepoolError> {
        owner.require_auth();
        require_initialized(&env)?;

        let mut store = PersistentStore::new(&env);
        let mut bank = TokenBank::new(&env);
        let paid = tidepool_position::collect_fees(&mut store, &mut bank, &owner, position_id)?;

        emit_rewards_collected(&env, RewardKind::Fee, position_id, &owner, &paid);
        Ok(paid)
    }

    pub fn collect_incentives(env: Env, owner: Address, position_id: u64) -> Result<Map<Address, i128>, TidepoolError> {
        owner.require_auth();
        require_initialized(&env)?;

        let mut store = PersistentStore::new(&env);
        let mut bank = TokenBank::new(&env);
        let paid = tidepool_position::collect_incentives(&mut store, &mut bank, &owner, position_id)?;

        emit_rewards_collected(&env, RewardKind::Incentive, position_id, &owner, &paid);
        Ok(paid)
    }

    /// Fund a pool's fee or incentive accumulator from `funder`
    pub fn add_rewards(
        env: Env,
        funder: Address,
        pool_id: u64,
        kind: RewardKind,
        token: Address,
        amount: i128,
    ) -> Result<(), TidepoolError> {
        funder.require_auth();
        require_initialized(&env)?;

        let mut store = PersistentStore::new(&env);
        let mut bank = TokenBank::new(&env);
        tidepool_position::add_rewards(&mut store, &mut bank, &funder, pool_id, kind, &token, amount)?;

        emit_rewards_added(&env, pool_id, kind, &token, amount);
        Ok(())
    }

    // ========================================================
    // VIEWS
    // ========================================================

    pub fn get_admin(env: Env) -> Result<Address, TidepoolError> {
        read_admin(&env)
    }

    pub fn get_pool(env: Env, pool_id: u64) -> Result<Pool, TidepoolError> {
        tidepool_position::get_pool(&PersistentStore::new(&env), pool_id)
    }

    pub fn get_position(env: Env, position_id: u64) -> Result<Position, TidepoolError> {
        tidepool_position::get_position(&PersistentStore::new(&env), position_id)
    }

    pub fn get_user_positions(env: Env, owner: Address) -> Vec<Position> {
        tidepool_position::get_user_positions(&PersistentStore::new(&env), &owner)
    }

    pub fn get_tick_info(env: Env, pool_id: u64, tick: i64) -> TickInfo {
        tidepool_tick::get_tick_info(&PersistentStore::new(&env), pool_id, tick)
    }

    pub fn get_next_position_id(env: Env) -> Result<u64, TidepoolError> {
        tidepool_position::peek_next_position_id(&PersistentStore::new(&env))
    }

    pub fn get_accumulator(env: Env, pool_id: u64, kind: RewardKind) -> Result<AccumulatorObject, TidepoolError> {
        tidepool_accum::get_accumulator(&PersistentStore::new(&env), &accumulator_name(kind, pool_id))
    }

    /// Whole units a position could collect right now
    pub fn get_claimable_rewards(
        env: Env,
        position_id: u64,
        kind: RewardKind,
    ) -> Result<Map<Address, i128>, TidepoolError> {
        tidepool_position::claimable_rewards(&PersistentStore::new(&env), kind, position_id)
    }
}
