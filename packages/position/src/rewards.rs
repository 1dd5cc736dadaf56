// Fee and incentive distribution
//
// Each pool carries one fee and one incentive accumulator. A position
// registers with both at creation and its shares track its liquidity.

use soroban_sdk::{Address, Map};
use tidepool_accum::{coins, get_accumulator, Coins, DecCoins};
use tidepool_math::{Dec, TidepoolError};
use tidepool_store::Storage;

use crate::bank::{send_coins, Bank};
use crate::pool::{accumulator_name, get_pool};
use crate::position::get_position;
use crate::types::{Pool, Position, RewardKind};

const REWARD_KINDS: [RewardKind; 2] = [RewardKind::Fee, RewardKind::Incentive];

/// Registers a position with zero shares in both pool accumulators
pub fn initialize_accumulator_positions<S: Storage>(
    store: &mut S,
    pool_id: u64,
    position_id: u64,
) -> Result<(), TidepoolError> {
    for kind in REWARD_KINDS {
        let mut accum = get_accumulator(store, &accumulator_name(kind, pool_id))?;
        if !accum.has_position(store, position_id) {
            accum.new_position(store, position_id, Dec::ZERO)?;
        }
    }
    Ok(())
}

/// Moves a position's accumulator shares by its liquidity change
pub fn update_accumulator_positions<S: Storage>(
    store: &mut S,
    pool_id: u64,
    position_id: u64,
    liquidity_delta: Dec,
) -> Result<(), TidepoolError> {
    if liquidity_delta.is_zero() {
        return Ok(());
    }
    for kind in REWARD_KINDS {
        let mut accum = get_accumulator(store, &accumulator_name(kind, pool_id))?;
        accum.update_position(store, position_id, liquidity_delta)?;
    }
    Ok(())
}

fn owned_position<S: Storage>(
    store: &S,
    owner: &Address,
    position_id: u64,
) -> Result<(Position, Pool), TidepoolError> {
    let position = get_position(store, position_id)?;
    if position.owner != *owner {
        return Err(TidepoolError::NotPositionOwner);
    }
    let pool = get_pool(store, position.pool_id)?;
    Ok((position, pool))
}

fn claim<S: Storage, B: Bank>(
    store: &mut S,
    bank: &mut B,
    kind: RewardKind,
    position: &Position,
    pool: &Pool,
) -> Result<Coins, TidepoolError> {
    let mut accum = get_accumulator(store, &accumulator_name(kind, pool.id))?;
    let payout = accum.claim_rewards(store, position.id)?;
    send_coins(bank, &payout, &pool.address, &position.owner)?;
    Ok(payout)
}

/// Pays a position's accrued fees to its owner
pub fn collect_fees<S: Storage, B: Bank>(
    store: &mut S,
    bank: &mut B,
    owner: &Address,
    position_id: u64,
) -> Result<Coins, TidepoolError> {
    let (position, pool) = owned_position(store, owner, position_id)?;
    claim(store, bank, RewardKind::Fee, &position, &pool)
}

/// Pays a position's accrued incentives to its owner
pub fn collect_incentives<S: Storage, B: Bank>(
    store: &mut S,
    bank: &mut B,
    owner: &Address,
    position_id: u64,
) -> Result<Coins, TidepoolError> {
    let (position, pool) = owned_position(store, owner, position_id)?;
    claim(store, bank, RewardKind::Incentive, &position, &pool)
}

/// Rewards a position could claim right now, in whole units
pub fn claimable_rewards<S: Storage>(
    store: &S,
    kind: RewardKind,
    position_id: u64,
) -> Result<Coins, TidepoolError> {
    let position = get_position(store, position_id)?;
    let accum = get_accumulator(store, &accumulator_name(kind, position.pool_id))?;
    let owed = accum.claimable_rewards(store, position.id)?;
    let (payout, _dust) = coins::truncate(&owed)?;
    Ok(payout)
}

/// Moves `amount` of `token` from `funder` into the pool and spreads it
/// over every share of the chosen accumulator
///
/// Growth per share is truncated; the remainder stays in the pool.
pub fn add_rewards<S: Storage, B: Bank>(
    store: &mut S,
    bank: &mut B,
    funder: &Address,
    pool_id: u64,
    kind: RewardKind,
    token: &Address,
    amount: i128,
) -> Result<DecCoins, TidepoolError> {
    if amount <= 0 {
        return Err(TidepoolError::InvalidAmount);
    }
    let pool = get_pool(store, pool_id)?;
    let mut accum = get_accumulator(store, &accumulator_name(kind, pool_id))?;
    if !accum.total_shares.is_positive() {
        return Err(TidepoolError::NoSharesToReward);
    }

    let mut funded: Coins = Map::new(store.env());
    funded.set(token.clone(), amount);
    let growth = coins::quo_dec(&coins::from_coins(&funded)?, accum.total_shares)?;

    bank.transfer(token, amount, funder, &pool.address)?;
    accum.add_to_accumulator(store, &growth)?;

    Ok(growth)
}
