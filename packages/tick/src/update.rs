// Tick Update Logic

use tidepool_math::{Dec, TidepoolError};
use tidepool_store::Storage;

use crate::types::{TickInfo, TickKey};

/// Tick info for `(pool_id, tick)`, zeroed when never referenced
pub fn get_tick_info<S: Storage>(store: &S, pool_id: u64, tick: i64) -> TickInfo {
    store
        .get(&TickKey::Tick(pool_id, tick))
        .unwrap_or_default()
}

pub fn get_liquidity_net<S: Storage>(store: &S, pool_id: u64, tick: i64) -> Dec {
    get_tick_info(store, pool_id, tick).liquidity_net
}

pub fn get_liquidity_gross<S: Storage>(store: &S, pool_id: u64, tick: i64) -> Dec {
    get_tick_info(store, pool_id, tick).liquidity_gross
}

/// Apply a position's liquidity change to one of its boundary ticks
///
/// Gross liquidity moves by `liquidity_delta`; net liquidity moves by
/// `liquidity_delta` at a lower boundary and by its negation at an upper
/// boundary. Returns true when the tick flipped between referenced and
/// unreferenced.
pub fn init_or_update_tick<S: Storage>(
    store: &mut S,
    pool_id: u64,
    tick_spacing: u64,
    tick: i64,
    liquidity_delta: Dec,
    upper: bool,
) -> Result<bool, TidepoolError> {
    let spacing = i64::try_from(tick_spacing).map_err(|_| TidepoolError::InvalidTickSpacing)?;
    if spacing <= 0 {
        return Err(TidepoolError::InvalidTickSpacing);
    }
    if tick % spacing != 0 {
        return Err(TidepoolError::TickNotAligned);
    }

    let mut info = get_tick_info(store, pool_id, tick);

    let liquidity_gross_before = info.liquidity_gross;
    let liquidity_gross_after = liquidity_gross_before.checked_add(liquidity_delta)?;
    if liquidity_gross_after.is_negative() {
        return Err(TidepoolError::TickLiquidityUnderflow);
    }

    let flipped = liquidity_gross_after.is_zero() != liquidity_gross_before.is_zero();

    info.liquidity_gross = liquidity_gross_after;
    info.liquidity_net = if upper {
        info.liquidity_net.checked_sub(liquidity_delta)?
    } else {
        info.liquidity_net.checked_add(liquidity_delta)?
    };

    store.set(&TickKey::Tick(pool_id, tick), &info);

    Ok(flipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;
    use tidepool_store::MemoryStore;

    fn dec(units: i128) -> Dec {
        Dec::from_int(units).unwrap()
    }

    #[test]
    fn test_lower_and_upper_boundaries() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);

        assert!(init_or_update_tick(&mut store, 1, 100, -200, dec(50), false).unwrap());
        assert!(init_or_update_tick(&mut store, 1, 100, 300, dec(50), true).unwrap());

        let lower = get_tick_info(&store, 1, -200);
        let upper = get_tick_info(&store, 1, 300);
        assert_eq!(lower.liquidity_gross, dec(50));
        assert_eq!(lower.liquidity_net, dec(50));
        assert_eq!(upper.liquidity_gross, dec(50));
        assert_eq!(upper.liquidity_net, dec(-50));
    }

    #[test]
    fn test_overlapping_positions_accumulate() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);

        // tick 300 is the upper bound of one range and the lower bound of another
        init_or_update_tick(&mut store, 1, 100, 300, dec(40), true).unwrap();
        let flipped = init_or_update_tick(&mut store, 1, 100, 300, dec(15), false).unwrap();
        assert!(!flipped);

        assert_eq!(get_liquidity_gross(&store, 1, 300), dec(55));
        assert_eq!(get_liquidity_net(&store, 1, 300), dec(-25));
    }

    #[test]
    fn test_add_then_remove_restores_tick() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);

        init_or_update_tick(&mut store, 7, 10, 20, dec(3), false).unwrap();
        let before = get_tick_info(&store, 7, 20);

        init_or_update_tick(&mut store, 7, 10, 20, dec(8), false).unwrap();
        let flipped = init_or_update_tick(&mut store, 7, 10, 20, dec(-8), false).unwrap();

        assert!(!flipped);
        assert_eq!(get_tick_info(&store, 7, 20), before);

        assert!(init_or_update_tick(&mut store, 7, 10, 20, dec(-3), false).unwrap());
        assert_eq!(get_tick_info(&store, 7, 20), TickInfo::default());
    }

    #[test]
    fn test_ticks_are_scoped_by_pool() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);

        init_or_update_tick(&mut store, 1, 10, 0, dec(5), false).unwrap();
        assert_eq!(get_tick_info(&store, 2, 0), TickInfo::default());
    }

    #[test]
    fn test_misaligned_tick() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);

        let result = init_or_update_tick(&mut store, 1, 100, 150, dec(1), false);
        assert_eq!(result, Err(TidepoolError::TickNotAligned));
        assert!(store.is_empty());
    }

    #[test]
    fn test_gross_liquidity_cannot_go_negative() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);

        init_or_update_tick(&mut store, 1, 1, 5, dec(2), false).unwrap();
        let result = init_or_update_tick(&mut store, 1, 1, 5, dec(-3), false);
        assert_eq!(result, Err(TidepoolError::TickLiquidityUnderflow));
        assert_eq!(get_liquidity_gross(&store, 1, 5), dec(2));
    }
}
