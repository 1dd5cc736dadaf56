// Accumulator ledger
//
// Rewards owed to a record are (value - init_accum_value) * num_shares.
// Any change to a record's shares first settles that amount into
// unclaimed_rewards and moves the snapshot to the current value.

use soroban_sdk::Map;
use tidepool_math::{Dec, TidepoolError};
use tidepool_store::Storage;

use crate::coins::{self, Coins, DecCoins};
use crate::types::{AccumKey, AccumName, AccumulatorObject, Record};

// ============================================================
// ACCUMULATOR LIFECYCLE
// ============================================================

/// Creates `name` with zero value and shares unless it already exists
pub fn make_accumulator<S: Storage>(store: &mut S, name: &AccumName) -> Result<(), TidepoolError> {
    let key = AccumKey::Accumulator(name.clone());
    if store.has(&key) {
        return Ok(());
    }

    let accum = AccumulatorObject {
        name: name.clone(),
        value: Map::new(store.env()),
        total_shares: Dec::ZERO,
    };
    store.set(&key, &accum);
    Ok(())
}

pub fn get_accumulator<S: Storage>(store: &S, name: &AccumName) -> Result<AccumulatorObject, TidepoolError> {
    store
        .get(&AccumKey::Accumulator(name.clone()))
        .ok_or(TidepoolError::AccumulatorNotFound)
}

/// Fails unless `custom` is non-negative and at least `old` in every denomination
pub fn validate_accumulator_value(custom: &DecCoins, old: &DecCoins) -> Result<(), TidepoolError> {
    if coins::is_any_negative(custom) {
        return Err(TidepoolError::InvalidAccumulatorValue);
    }
    coins::safe_sub(custom, old)?;
    Ok(())
}

fn record_key(accum: &AccumulatorObject, position_id: u64) -> AccumKey {
    AccumKey::AccumRecord(accum.name.clone(), position_id)
}

/// Rewards a record earned between its snapshot and `accum_value`
///
/// Excludes anything already settled into `unclaimed_rewards`.
pub fn rewards_since(record: &Record, accum_value: &DecCoins) -> Result<DecCoins, TidepoolError> {
    let growth = coins::safe_sub(accum_value, &record.init_accum_value)?;
    coins::mul_dec(&growth, record.num_shares)
}

/// Writes a position record with `num_shares` and snapshot `accum_value`
///
/// When the record already exists, rewards accrued since its last
/// snapshot are settled into `unclaimed_rewards` first. `unclaimed_rewards`
/// is added on top.
pub fn init_or_update_position<S: Storage>(
    store: &mut S,
    accum: &AccumulatorObject,
    accum_value: &DecCoins,
    position_id: u64,
    num_shares: Dec,
    unclaimed_rewards: &DecCoins,
) -> Result<(), TidepoolError> {
    let key = record_key(accum, position_id);

    let unclaimed = match store.get::<AccumKey, Record>(&key) {
        Some(existing) => {
            let accrued = rewards_since(&existing, &accum.value)?;
            coins::add(&coins::add(&existing.unclaimed_rewards, &accrued)?, unclaimed_rewards)?
        }
        None => unclaimed_rewards.clone(),
    };

    let record = Record {
        num_shares,
        init_accum_value: accum_value.clone(),
        unclaimed_rewards: unclaimed,
    };
    store.set(&key, &record);
    Ok(())
}

// ============================================================
// ACCUMULATOR OPERATIONS
// ============================================================

impl AccumulatorObject {
    fn save<S: Storage>(&self, store: &mut S) {
        store.set(&AccumKey::Accumulator(self.name.clone()), self);
    }

    /// Grows the value per share by `amount`
    pub fn add_to_accumulator<S: Storage>(&mut self, store: &mut S, amount: &DecCoins) -> Result<(), TidepoolError> {
        if coins::is_any_negative(amount) {
            return Err(TidepoolError::InvalidAccumulatorValue);
        }
        self.value = coins::add(&self.value, amount)?;
        self.save(store);
        Ok(())
    }

    pub fn has_position<S: Storage>(&self, store: &S, position_id: u64) -> bool {
        store.has(&record_key(self, position_id))
    }

    pub fn get_position<S: Storage>(&self, store: &S, position_id: u64) -> Result<Record, TidepoolError> {
        store
            .get(&record_key(self, position_id))
            .ok_or(TidepoolError::AccumulatorPositionNotFound)
    }

    pub fn get_position_size<S: Storage>(&self, store: &S, position_id: u64) -> Result<Dec, TidepoolError> {
        Ok(self.get_position(store, position_id)?.num_shares)
    }

    /// Settled plus accrued rewards, without touching the record
    pub fn claimable_rewards<S: Storage>(&self, store: &S, position_id: u64) -> Result<DecCoins, TidepoolError> {
        let record = self.get_position(store, position_id)?;
        let accrued = rewards_since(&record, &self.value)?;
        coins::add(&record.unclaimed_rewards, &accrued)
    }

    /// Registers a position snapshotted at the current value
    pub fn new_position<S: Storage>(&mut self, store: &mut S, position_id: u64, num_shares: Dec) -> Result<(), TidepoolError> {
        let value = self.value.clone();
        self.new_position_custom_acc(store, position_id, num_shares, &value)
    }

    /// Registers a position snapshotted at `custom_value`
    ///
    /// `custom_value` may not lie below the accumulator's value in any
    /// denomination.
    pub fn new_position_custom_acc<S: Storage>(
        &mut self,
        store: &mut S,
        position_id: u64,
        num_shares: Dec,
        custom_value: &DecCoins,
    ) -> Result<(), TidepoolError> {
        if num_shares.is_negative() {
            return Err(TidepoolError::InvalidAmount);
        }
        if self.has_position(store, position_id) {
            return Err(TidepoolError::AccumulatorPositionExists);
        }
        validate_accumulator_value(custom_value, &self.value)?;

        let empty = Map::new(store.env());
        init_or_update_position(store, self, custom_value, position_id, num_shares, &empty)?;

        self.total_shares = self.total_shares.checked_add(num_shares)?;
        self.save(store);
        Ok(())
    }

    pub fn add_to_position<S: Storage>(&mut self, store: &mut S, position_id: u64, num_shares: Dec) -> Result<(), TidepoolError> {
        if !num_shares.is_positive() {
            return Err(TidepoolError::ZeroShares);
        }
        let record = self.get_position(store, position_id)?;
        let new_shares = record.num_shares.checked_add(num_shares)?;

        let (value, empty) = (self.value.clone(), Map::new(store.env()));
        init_or_update_position(store, self, &value, position_id, new_shares, &empty)?;

        self.total_shares = self.total_shares.checked_add(num_shares)?;
        self.save(store);
        Ok(())
    }

    pub fn remove_from_position<S: Storage>(&mut self, store: &mut S, position_id: u64, num_shares: Dec) -> Result<(), TidepoolError> {
        if !num_shares.is_positive() {
            return Err(TidepoolError::ZeroShares);
        }
        let record = self.get_position(store, position_id)?;
        if num_shares > record.num_shares {
            return Err(TidepoolError::InsufficientShares);
        }
        let new_shares = record.num_shares.checked_sub(num_shares)?;

        let (value, empty) = (self.value.clone(), Map::new(store.env()));
        init_or_update_position(store, self, &value, position_id, new_shares, &empty)?;

        self.total_shares = self.total_shares.checked_sub(num_shares)?;
        self.save(store);
        Ok(())
    }

    /// Adds or removes shares depending on the sign of `delta`
    pub fn update_position<S: Storage>(&mut self, store: &mut S, position_id: u64, delta: Dec) -> Result<(), TidepoolError> {
        if delta.is_negative() {
            self.remove_from_position(store, position_id, delta.checked_neg()?)
        } else {
            self.add_to_position(store, position_id, delta)
        }
    }

    /// Replaces a record's snapshot without settling
    ///
    /// `custom_value` may not lie below the record's current snapshot.
    pub fn set_position_custom_acc<S: Storage>(
        &self,
        store: &mut S,
        position_id: u64,
        custom_value: &DecCoins,
    ) -> Result<(), TidepoolError> {
        let record = self.get_position(store, position_id)?;
        validate_accumulator_value(custom_value, &record.init_accum_value)?;

        let updated = Record {
            init_accum_value: custom_value.clone(),
            ..record
        };
        store.set(&record_key(self, position_id), &updated);
        Ok(())
    }

    /// Pays out whole units of everything owed to a position
    ///
    /// Fractions are forfeited. The record is deleted once it holds no
    /// shares; otherwise it restarts from the current value with nothing
    /// unclaimed.
    pub fn claim_rewards<S: Storage>(&mut self, store: &mut S, position_id: u64) -> Result<Coins, TidepoolError> {
        let record = self.get_position(store, position_id)?;
        let accrued = rewards_since(&record, &self.value)?;
        let total = coins::add(&record.unclaimed_rewards, &accrued)?;
        let (payout, _dust) = coins::truncate(&total)?;

        let key = record_key(self, position_id);
        if record.num_shares.is_zero() {
            store.remove(&key);
        } else {
            let restarted = Record {
                num_shares: record.num_shares,
                init_accum_value: self.value.clone(),
                unclaimed_rewards: Map::new(store.env()),
            };
            store.set(&key, &restarted);
        }

        Ok(payout)
    }
}
