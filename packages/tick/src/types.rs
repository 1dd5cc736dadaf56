// Tick Types

use soroban_sdk::contracttype;
use tidepool_math::Dec;

/// Liquidity bookkeeping at an initialized tick boundary
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TickInfo {
    /// Total liquidity referencing this tick
    pub liquidity_gross: Dec,
    /// Net liquidity change when price crosses upward
    pub liquidity_net: Dec,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TickKey {
    /// Tick info by (pool_id, tick)
    Tick(u64, i64),
}
