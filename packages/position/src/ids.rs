// Monotonic id counters for pools and positions

use tidepool_math::TidepoolError;
use tidepool_store::Storage;

use crate::types::PositionKey;

const FIRST_ID: u64 = 1;

/// Seeds both counters at 1
pub fn init_id_counters<S: Storage>(store: &mut S) -> Result<(), TidepoolError> {
    if store.has(&PositionKey::NextPositionId) || store.has(&PositionKey::NextPoolId) {
        return Err(TidepoolError::AlreadyInitialized);
    }
    store.set(&PositionKey::NextPositionId, &FIRST_ID);
    store.set(&PositionKey::NextPoolId, &FIRST_ID);
    Ok(())
}

fn take_next<S: Storage>(store: &mut S, key: &PositionKey) -> Result<u64, TidepoolError> {
    let id: u64 = store.get(key).ok_or(TidepoolError::NotInitialized)?;
    let next = id.checked_add(1).ok_or(TidepoolError::Overflow)?;
    store.set(key, &next);
    Ok(id)
}

/// Id the next created position will receive
pub fn peek_next_position_id<S: Storage>(store: &S) -> Result<u64, TidepoolError> {
    store
        .get(&PositionKey::NextPositionId)
        .ok_or(TidepoolError::NotInitialized)
}

pub fn next_position_id<S: Storage>(store: &mut S) -> Result<u64, TidepoolError> {
    take_next(store, &PositionKey::NextPositionId)
}

pub fn next_pool_id<S: Storage>(store: &mut S) -> Result<u64, TidepoolError> {
    take_next(store, &PositionKey::NextPoolId)
}
