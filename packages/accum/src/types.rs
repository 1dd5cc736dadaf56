// Accumulator Types

use soroban_sdk::{contracttype, Symbol};
use tidepool_math::Dec;

use crate::coins::DecCoins;

/// Accumulator identity, e.g. ("fee", pool_id)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccumName {
    pub prefix: Symbol,
    pub id: u64,
}

/// Named running total of value per share
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccumulatorObject {
    pub name: AccumName,
    /// Cumulative value per share, one entry per denomination
    pub value: DecCoins,
    /// Sum of shares across all registered positions
    pub total_shares: Dec,
}

/// A position's registration with an accumulator
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    pub num_shares: Dec,
    /// Accumulator value at the last settle
    pub init_accum_value: DecCoins,
    /// Rewards settled but not yet claimed
    pub unclaimed_rewards: DecCoins,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccumKey {
    Accumulator(AccumName),
    /// Position record by (accumulator, position_id)
    AccumRecord(AccumName, u64),
}
