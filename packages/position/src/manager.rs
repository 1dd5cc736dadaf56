// SPDX-License-Identifier: MIT
// Position lifecycle
//
// Creation runs inside a staged scope: nothing reaches the store unless
// every step, including custody, succeeds.

use soroban_sdk::Address;
use tidepool_math::{
    get_liquidity_from_amounts, price_to_tick, ticks_to_sqrt_price, Dec, TidepoolError,
};
use tidepool_store::{StagedStore, Storage};
use tidepool_tick::init_or_update_tick;

use crate::bank::{send_between_pool_and_user, Bank};
use crate::ids::next_position_id;
use crate::pool::{get_pool, set_pool};
use crate::position::{delete_position, get_position, init_or_update_position};
use crate::rewards::{
    collect_fees, collect_incentives, initialize_accumulator_positions,
    update_accumulator_positions,
};
use crate::types::{CreatePositionResult, LiquidityChange, Pool};
use crate::validation::{validate_amounts, validate_tick_range};

/// Whole token units for a signed amount
///
/// Deposits round up; payouts truncate toward zero.
fn to_token_amount(amount: Dec, deposit: bool) -> i128 {
    if deposit {
        amount.ceil_int()
    } else {
        amount.truncate_int()
    }
}

// ============================================================
// CREATE
// ============================================================

/// Opens a position on `pool_id` from the desired token amounts
///
/// The first position of a pool sets its price from the desired ratio
/// `amount1_desired / amount0_desired`. Tokens move from `owner` to the
/// pool only after every check has passed.
#[allow(clippy::too_many_arguments)]
pub fn create_position<S: Storage, B: Bank>(
    store: &mut S,
    bank: &mut B,
    pool_id: u64,
    owner: &Address,
    amount0_desired: i128,
    amount1_desired: i128,
    amount0_min: i128,
    amount1_min: i128,
    lower_tick: i64,
    upper_tick: i64,
    join_time: u64,
) -> Result<(CreatePositionResult, LiquidityChange), TidepoolError> {
    let mut pool = get_pool(store, pool_id)?;
    validate_tick_range(pool.tick_spacing, pool.exponent_at_price_one, lower_tick, upper_tick)?;
    validate_amounts(&[amount0_desired, amount1_desired, amount0_min, amount1_min])?;

    let (sqrt_price_lower, sqrt_price_upper) =
        ticks_to_sqrt_price(lower_tick, upper_tick, pool.exponent_at_price_one)?;

    let mut scope = StagedStore::begin(store);

    let position_id = next_position_id(&mut scope)?;

    if !pool.is_initialized() {
        initialize_initial_position_for_pool(&mut scope, &mut pool, amount0_desired, amount1_desired)?;
    }

    let sqrt_price =
        pool.effective_sqrt_price(lower_tick, upper_tick, sqrt_price_lower, sqrt_price_upper)?;
    let liquidity = get_liquidity_from_amounts(
        sqrt_price,
        sqrt_price_lower,
        sqrt_price_upper,
        amount0_desired,
        amount1_desired,
    )?;
    if !liquidity.is_positive() {
        return Err(TidepoolError::ZeroLiquidity);
    }

    initialize_accumulator_positions(&mut scope, pool_id, position_id)?;

    let (amount0, amount1) = update_position(
        &mut scope,
        pool_id,
        owner,
        lower_tick,
        upper_tick,
        liquidity,
        join_time,
        position_id,
    )?;

    if amount0 < amount0_min {
        return Err(TidepoolError::InsufficientAmount0);
    }
    if amount1 < amount1_min {
        return Err(TidepoolError::InsufficientAmount1);
    }

    send_between_pool_and_user(bank, &pool.token0, &pool.token1, amount0, amount1, owner, &pool.address)?;

    scope.commit();

    let result = CreatePositionResult {
        position_id,
        amount0,
        amount1,
        liquidity,
        join_time,
    };
    let change = LiquidityChange {
        position_id,
        owner: owner.clone(),
        pool_id,
        lower_tick,
        upper_tick,
        join_time,
        liquidity_delta: liquidity,
        amount0,
        amount1,
    };

    Ok((result, change))
}

/// Sets a fresh pool's price from the first deposit's ratio
pub fn initialize_initial_position_for_pool<S: Storage>(
    store: &mut S,
    pool: &mut Pool,
    amount0_desired: i128,
    amount1_desired: i128,
) -> Result<(), TidepoolError> {
    if amount0_desired <= 0 || amount1_desired <= 0 {
        return Err(TidepoolError::ZeroInitialLiquidity);
    }

    let spot_price = Dec::from_int(amount1_desired)?.checked_quo(Dec::from_int(amount0_desired)?)?;
    let tick = price_to_tick(spot_price, pool.exponent_at_price_one)?;
    let sqrt_price = spot_price.sqrt()?;

    pool.set_initial_price(sqrt_price, tick);
    set_pool(store, pool);
    Ok(())
}

// ============================================================
// UPDATE
// ============================================================

/// Applies a signed liquidity change to a position and everything it touches
///
/// Boundary ticks, the position record, the pool's active liquidity and
/// the reward accumulator shares all move by `liquidity_delta`. Returns
/// the token amounts the change is worth: positive to deposit, negative to
/// pay out.
#[allow(clippy::too_many_arguments)]
pub fn update_position<S: Storage>(
    store: &mut S,
    pool_id: u64,
    owner: &Address,
    lower_tick: i64,
    upper_tick: i64,
    liquidity_delta: Dec,
    join_time: u64,
    position_id: u64,
) -> Result<(i128, i128), TidepoolError> {
    let mut pool = get_pool(store, pool_id)?;

    init_or_update_tick(store, pool_id, pool.tick_spacing, lower_tick, liquidity_delta, false)?;
    init_or_update_tick(store, pool_id, pool.tick_spacing, upper_tick, liquidity_delta, true)?;

    init_or_update_position(
        store,
        pool_id,
        owner,
        lower_tick,
        upper_tick,
        liquidity_delta,
        join_time,
        position_id,
    )?;

    let (sqrt_price_lower, sqrt_price_upper) =
        ticks_to_sqrt_price(lower_tick, upper_tick, pool.exponent_at_price_one)?;
    let (amount0, amount1) = pool.calc_actual_amounts(
        lower_tick,
        upper_tick,
        sqrt_price_lower,
        sqrt_price_upper,
        liquidity_delta,
    )?;

    if pool.update_liquidity_if_active_position(lower_tick, upper_tick, liquidity_delta)? {
        set_pool(store, &pool);
    }

    update_accumulator_positions(store, pool_id, position_id, liquidity_delta)?;

    let deposit = liquidity_delta.is_positive();
    Ok((to_token_amount(amount0, deposit), to_token_amount(amount1, deposit)))
}

// ============================================================
// WITHDRAW
// ============================================================

/// Removes `liquidity` from a position and pays its tokens to the owner
///
/// Outstanding incentives are paid first. Withdrawing everything also
/// pays outstanding fees and deletes the position. Returns the amounts
/// paid for the liquidity, excluding rewards.
pub fn withdraw_position<S: Storage, B: Bank>(
    store: &mut S,
    bank: &mut B,
    owner: &Address,
    position_id: u64,
    liquidity: Dec,
) -> Result<((i128, i128), LiquidityChange), TidepoolError> {
    let position = get_position(store, position_id)?;
    if position.owner != *owner {
        return Err(TidepoolError::NotPositionOwner);
    }
    let pool = get_pool(store, position.pool_id)?;
    validate_tick_range(
        pool.tick_spacing,
        pool.exponent_at_price_one,
        position.lower_tick,
        position.upper_tick,
    )?;

    if !liquidity.is_positive() {
        return Err(TidepoolError::InvalidLiquidityAmount);
    }
    let available = position.liquidity;
    if liquidity > available {
        return Err(TidepoolError::InsufficientLiquidity);
    }

    collect_incentives(store, bank, owner, position_id)?;

    let liquidity_delta = liquidity.checked_neg()?;
    let (amount0, amount1) = update_position(
        store,
        pool.id,
        owner,
        position.lower_tick,
        position.upper_tick,
        liquidity_delta,
        position.join_time,
        position_id,
    )?;

    let amount0_out = amount0.checked_neg().ok_or(TidepoolError::Overflow)?;
    let amount1_out = amount1.checked_neg().ok_or(TidepoolError::Overflow)?;
    send_between_pool_and_user(bank, &pool.token0, &pool.token1, amount0_out, amount1_out, &pool.address, owner)?;

    if liquidity == available {
        collect_fees(store, bank, owner, position_id)?;
        collect_incentives(store, bank, owner, position_id)?;
        delete_position(store, position_id)?;
    }

    let change = LiquidityChange {
        position_id,
        owner: owner.clone(),
        pool_id: pool.id,
        lower_tick: position.lower_tick,
        upper_tick: position.upper_tick,
        join_time: position.join_time,
        liquidity_delta,
        amount0,
        amount1,
    };

    Ok(((amount0_out, amount1_out), change))
}
