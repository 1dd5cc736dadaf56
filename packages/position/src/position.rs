// Position records and the per-owner index

use soroban_sdk::{Address, Vec};
use tidepool_math::{Dec, TidepoolError};
use tidepool_store::Storage;

use crate::types::{Position, PositionKey};

pub fn get_position<S: Storage>(store: &S, position_id: u64) -> Result<Position, TidepoolError> {
    store
        .get(&PositionKey::Position(position_id))
        .ok_or(TidepoolError::PositionNotFound)
}

pub fn has_position<S: Storage>(store: &S, position_id: u64) -> bool {
    store.has(&PositionKey::Position(position_id))
}

pub fn get_position_liquidity<S: Storage>(store: &S, position_id: u64) -> Result<Dec, TidepoolError> {
    Ok(get_position(store, position_id)?.liquidity)
}

fn owner_position_ids<S: Storage>(store: &S, owner: &Address) -> Vec<u64> {
    store
        .get(&PositionKey::OwnerPositions(owner.clone()))
        .unwrap_or_else(|| Vec::new(store.env()))
}

fn set_owner_position_ids<S: Storage>(store: &mut S, owner: &Address, ids: &Vec<u64>) {
    let key = PositionKey::OwnerPositions(owner.clone());
    if ids.is_empty() {
        store.remove(&key);
    } else {
        store.set(&key, ids);
    }
}

/// Adds `liquidity_delta` to a position, creating the record on first use
///
/// A new record takes the range, owner and join time given here; later
/// calls only move its liquidity.
#[allow(clippy::too_many_arguments)]
pub fn init_or_update_position<S: Storage>(
    store: &mut S,
    pool_id: u64,
    owner: &Address,
    lower_tick: i64,
    upper_tick: i64,
    liquidity_delta: Dec,
    join_time: u64,
    position_id: u64,
) -> Result<Position, TidepoolError> {
    let position = match store.get::<PositionKey, Position>(&PositionKey::Position(position_id)) {
        Some(mut existing) => {
            existing.liquidity = existing.liquidity.checked_add(liquidity_delta)?;
            existing
        }
        None => {
            let mut ids = owner_position_ids(store, owner);
            ids.push_back(position_id);
            set_owner_position_ids(store, owner, &ids);

            Position {
                id: position_id,
                pool_id,
                owner: owner.clone(),
                lower_tick,
                upper_tick,
                liquidity: liquidity_delta,
                join_time,
            }
        }
    };

    if position.liquidity.is_negative() {
        return Err(TidepoolError::InsufficientLiquidity);
    }

    store.set(&PositionKey::Position(position_id), &position);
    Ok(position)
}

/// Removes a position and drops it from its owner's index
pub fn delete_position<S: Storage>(store: &mut S, position_id: u64) -> Result<(), TidepoolError> {
    let position = get_position(store, position_id)?;

    let mut ids = owner_position_ids(store, &position.owner);
    if let Some(index) = ids.first_index_of(position_id) {
        ids.remove(index);
    }
    set_owner_position_ids(store, &position.owner, &ids);

    store.remove(&PositionKey::Position(position_id));
    Ok(())
}

/// Every open position held by `owner`, in creation order
pub fn get_user_positions<S: Storage>(store: &S, owner: &Address) -> Vec<Position> {
    let mut positions = Vec::new(store.env());
    for id in owner_position_ids(store, owner).iter() {
        if let Ok(position) = get_position(store, id) {
            positions.push_back(position);
        }
    }
    positions
}
