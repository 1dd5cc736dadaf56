// Pool records and price state

use soroban_sdk::{symbol_short, Address};
use tidepool_accum::{make_accumulator, AccumName};
use tidepool_math::{
    calc_actual_amounts, effective_sqrt_price, validate_exponent_at_price_one, Dec, TidepoolError,
};
use tidepool_store::Storage;

use crate::ids::next_pool_id;
use crate::types::{Pool, PoolPrice, PositionKey, PriceState, RewardKind};

// ============================================================
// STORAGE
// ============================================================

pub fn get_pool<S: Storage>(store: &S, pool_id: u64) -> Result<Pool, TidepoolError> {
    store
        .get(&PositionKey::Pool(pool_id))
        .ok_or(TidepoolError::PoolNotFound)
}

pub fn set_pool<S: Storage>(store: &mut S, pool: &Pool) {
    store.set(&PositionKey::Pool(pool.id), pool);
}

/// Accumulator name for a pool's fees or incentives
pub fn accumulator_name(kind: RewardKind, pool_id: u64) -> AccumName {
    let prefix = match kind {
        RewardKind::Fee => symbol_short!("fee"),
        RewardKind::Incentive => symbol_short!("incentive"),
    };
    AccumName { prefix, id: pool_id }
}

/// Registers a new pool with no price and both reward accumulators
pub fn create_pool<S: Storage>(
    store: &mut S,
    address: &Address,
    token0: &Address,
    token1: &Address,
    tick_spacing: u64,
    exponent_at_price_one: i32,
) -> Result<Pool, TidepoolError> {
    if token0 == token1 {
        return Err(TidepoolError::SameToken);
    }
    if tick_spacing == 0 || i64::try_from(tick_spacing).is_err() {
        return Err(TidepoolError::InvalidTickSpacing);
    }
    validate_exponent_at_price_one(exponent_at_price_one)?;

    let pool = Pool {
        id: next_pool_id(store)?,
        address: address.clone(),
        token0: token0.clone(),
        token1: token1.clone(),
        tick_spacing,
        exponent_at_price_one,
        price: PoolPrice::Uninitialized,
        liquidity: Dec::ZERO,
    };

    make_accumulator(store, &accumulator_name(RewardKind::Fee, pool.id))?;
    make_accumulator(store, &accumulator_name(RewardKind::Incentive, pool.id))?;
    set_pool(store, &pool);

    Ok(pool)
}

// ============================================================
// PRICE STATE
// ============================================================

impl Pool {
    pub fn is_initialized(&self) -> bool {
        matches!(self.price, PoolPrice::Initialized(_))
    }

    pub fn current_price(&self) -> Result<PriceState, TidepoolError> {
        match &self.price {
            PoolPrice::Initialized(state) => Ok(state.clone()),
            PoolPrice::Uninitialized => Err(TidepoolError::PoolNotInitialized),
        }
    }

    pub fn set_initial_price(&mut self, sqrt_price: Dec, tick: i64) {
        self.price = PoolPrice::Initialized(PriceState { sqrt_price, tick });
    }

    /// True when `lower_tick <= current tick < upper_tick`
    pub fn is_current_tick_in_range(&self, lower_tick: i64, upper_tick: i64) -> bool {
        match &self.price {
            PoolPrice::Initialized(state) => state.tick >= lower_tick && state.tick < upper_tick,
            PoolPrice::Uninitialized => false,
        }
    }

    /// Applies `liquidity_delta` to the active liquidity if the range is in range
    pub fn update_liquidity_if_active_position(
        &mut self,
        lower_tick: i64,
        upper_tick: i64,
        liquidity_delta: Dec,
    ) -> Result<bool, TidepoolError> {
        if !self.is_current_tick_in_range(lower_tick, upper_tick) {
            return Ok(false);
        }
        let liquidity = self.liquidity.checked_add(liquidity_delta)?;
        if liquidity.is_negative() {
            return Err(TidepoolError::InsufficientLiquidity);
        }
        self.liquidity = liquidity;
        Ok(true)
    }

    /// Sqrt price a range is sized and charged at, following the current tick
    pub fn effective_sqrt_price(
        &self,
        lower_tick: i64,
        upper_tick: i64,
        sqrt_price_lower: Dec,
        sqrt_price_upper: Dec,
    ) -> Result<Dec, TidepoolError> {
        let state = self.current_price()?;
        Ok(effective_sqrt_price(
            state.tick,
            state.sqrt_price,
            lower_tick,
            upper_tick,
            sqrt_price_lower,
            sqrt_price_upper,
        ))
    }

    /// Signed token amounts for a liquidity change at the current price
    pub fn calc_actual_amounts(
        &self,
        lower_tick: i64,
        upper_tick: i64,
        sqrt_price_lower: Dec,
        sqrt_price_upper: Dec,
        liquidity_delta: Dec,
    ) -> Result<(Dec, Dec), TidepoolError> {
        let state = self.current_price()?;
        calc_actual_amounts(
            state.tick,
            state.sqrt_price,
            lower_tick,
            upper_tick,
            sqrt_price_lower,
            sqrt_price_upper,
            liquidity_delta,
        )
    }
}
