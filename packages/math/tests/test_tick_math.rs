use tidepool_math::*;

fn dec(units: i128) -> Dec {
    Dec::from_int(units).unwrap()
}

/// Decimal from a mantissa and a power-of-ten scale, e.g. (10003, -4) = 1.0003
fn dec_scaled(mantissa: i128, exponent: i32) -> Dec {
    Dec::from_raw(mantissa * Dec::pow10(exponent).unwrap().raw())
}

// ============================================================
// GRID PARAMETERS
// ============================================================

#[test]
fn test_ticks_per_decade() {
    assert_eq!(ticks_per_decade(-1).unwrap(), 90);
    assert_eq!(ticks_per_decade(-6).unwrap(), 9_000_000);
    assert_eq!(ticks_per_decade(-12).unwrap(), 9_000_000_000_000);
}

#[test]
fn test_exponent_out_of_range() {
    assert_eq!(ticks_per_decade(0), Err(TidepoolError::InvalidExponentAtPriceOne));
    assert_eq!(ticks_per_decade(-13), Err(TidepoolError::InvalidExponentAtPriceOne));
    assert_eq!(tick_to_price(0, 2), Err(TidepoolError::InvalidExponentAtPriceOne));
}

#[test]
fn test_min_max_ticks_match_price_bounds() {
    let (min_tick, max_tick) = min_max_ticks(-6).unwrap();
    assert_eq!(min_tick, -108_000_000);
    assert_eq!(max_tick, 180_000_000);

    let min_price = min_spot_price(-6).unwrap();
    assert_eq!(min_price, dec_scaled(1, -12));
    assert_eq!(price_to_tick(min_price, -6).unwrap(), min_tick);
    assert_eq!(price_to_tick(Dec::from_raw(MAX_SPOT_PRICE_RAW), -6).unwrap(), max_tick);
    assert_eq!(tick_to_price(min_tick, -6).unwrap(), min_price);
    assert_eq!(tick_to_price(max_tick, -6).unwrap(), Dec::from_raw(MAX_SPOT_PRICE_RAW));
}

#[test]
fn test_min_spot_price_follows_exponent() {
    assert_eq!(min_spot_price_exponent(-12).unwrap(), -6);
    assert_eq!(min_spot_price_exponent(-6).unwrap(), -12);
    assert_eq!(min_spot_price_exponent(-1).unwrap(), -17);
    assert_eq!(min_spot_price_exponent(0), Err(TidepoolError::InvalidExponentAtPriceOne));

    for exponent in [-1, -4, -6, -9, -12] {
        let (min_tick, _) = min_max_ticks(exponent).unwrap();
        let floor = min_spot_price(exponent).unwrap();
        assert_eq!(tick_to_price(min_tick, exponent).unwrap(), floor);
        // the bottom decade always steps by one raw unit
        assert_eq!(tick_to_price(min_tick + 1, exponent).unwrap().raw(), floor.raw() + 1);
    }
}

#[test]
fn test_coarse_grid_reaches_tiny_prices() {
    // 1e-15 is below what a fine grid encodes but within a coarse one
    let price = dec_scaled(1, -15);
    assert_eq!(price_to_tick(price, -12), Err(TidepoolError::PriceOutOfBounds));
    assert_eq!(price_to_tick(price, -1).unwrap(), -15 * ticks_per_decade(-1).unwrap());
}

// ============================================================
// TICK -> PRICE
// ============================================================

#[test]
fn test_tick_to_price_above_one() {
    assert_eq!(tick_to_price(0, -6).unwrap(), Dec::ONE);
    assert_eq!(tick_to_price(300, -6).unwrap(), dec_scaled(10003, -4));
    assert_eq!(tick_to_price(700, -6).unwrap(), dec_scaled(10007, -4));
    assert_eq!(tick_to_price(4_000_000, -6).unwrap(), dec(5));
    assert_eq!(tick_to_price(9_000_000, -6).unwrap(), dec(10));
    // first tick of the second decade moves by 10^-5
    assert_eq!(tick_to_price(9_000_001, -6).unwrap(), dec_scaled(1_000_001, -5));
}

#[test]
fn test_tick_to_price_below_one() {
    // below one the increment is one order finer
    assert_eq!(tick_to_price(-1, -6).unwrap(), dec_scaled(9_999_999, -7));
    assert_eq!(tick_to_price(-9_000_000, -6).unwrap(), dec_scaled(1, -1));
    assert_eq!(tick_to_price(-4_500_000, -6).unwrap(), dec_scaled(55, -2));
    assert_eq!(tick_to_price(-9_000_001, -6).unwrap(), dec_scaled(9_999_999, -8));
}

#[test]
fn test_tick_to_price_out_of_range() {
    let (min_tick, max_tick) = min_max_ticks(-6).unwrap();
    assert_eq!(tick_to_price(max_tick + 1, -6), Err(TidepoolError::InvalidTick));
    assert_eq!(tick_to_price(min_tick - 1, -6), Err(TidepoolError::InvalidTick));
}

#[test]
fn test_tick_to_price_finest_exponent_at_min_tick() {
    let (min_tick, _) = min_max_ticks(-12).unwrap();
    // one tick above the floor moves price by the last representable digit
    let price = tick_to_price(min_tick + 1, -12).unwrap();
    assert_eq!(price.raw(), min_spot_price(-12).unwrap().raw() + 1);
}

#[test]
fn test_ticks_to_sqrt_price() {
    let (sqrt_lower, sqrt_upper) = ticks_to_sqrt_price(3_000_000, 4_000_000, -6).unwrap();
    assert_eq!(sqrt_lower, dec(2));
    assert_eq!(sqrt_upper, dec(5).sqrt().unwrap());
}

#[test]
fn test_ticks_to_sqrt_price_invalid_order() {
    assert_eq!(ticks_to_sqrt_price(700, 300, -6), Err(TidepoolError::InvalidTick));
    assert_eq!(ticks_to_sqrt_price(300, 300, -6), Err(TidepoolError::InvalidTick));
}

#[test]
fn test_ticks_to_sqrt_price_out_of_range() {
    let (_, max_tick) = min_max_ticks(-6).unwrap();
    assert_eq!(ticks_to_sqrt_price(0, max_tick + 100, -6), Err(TidepoolError::InvalidTick));
}

// ============================================================
// PRICE -> TICK
// ============================================================

#[test]
fn test_price_to_tick_exact_prices() {
    assert_eq!(price_to_tick(Dec::ONE, -6).unwrap(), 0);
    assert_eq!(price_to_tick(dec(5), -6).unwrap(), 4_000_000);
    assert_eq!(price_to_tick(dec(10), -6).unwrap(), 9_000_000);
    assert_eq!(price_to_tick(dec_scaled(10003, -4), -6).unwrap(), 300);
    assert_eq!(price_to_tick(dec_scaled(1, -1), -6).unwrap(), -9_000_000);
    assert_eq!(price_to_tick(dec_scaled(55, -2), -6).unwrap(), -4_500_000);
}

#[test]
fn test_price_to_tick_rounds_to_nearest() {
    // 5.0000004 sits 0.4 ticks above tick 4_000_000
    assert_eq!(price_to_tick(dec_scaled(50_000_004, -7), -6).unwrap(), 4_000_000);
    // 5.0000006 sits 0.6 ticks above
    assert_eq!(price_to_tick(dec_scaled(50_000_006, -7), -6).unwrap(), 4_000_001);
}

#[test]
fn test_price_to_tick_invalid_price() {
    assert_eq!(price_to_tick(Dec::ZERO, -6), Err(TidepoolError::InvalidPrice));
    assert_eq!(price_to_tick(dec(-3), -6), Err(TidepoolError::InvalidPrice));
}

#[test]
fn test_price_to_tick_out_of_bounds() {
    let too_high = Dec::from_raw(MAX_SPOT_PRICE_RAW + 1);
    let too_low = Dec::from_raw(min_spot_price(-6).unwrap().raw() - 1);
    assert_eq!(price_to_tick(too_high, -6), Err(TidepoolError::PriceOutOfBounds));
    assert_eq!(price_to_tick(too_low, -6), Err(TidepoolError::PriceOutOfBounds));
}

#[test]
fn test_price_to_tick_inverts_tick_to_price() {
    for exponent in [-1, -4, -6, -9, -12] {
        let distance = ticks_per_decade(exponent).unwrap();
        for tick in [1, -1, distance - 1, distance + 7, -distance - 3, 5 * distance + 11] {
            let price = tick_to_price(tick, exponent).unwrap();
            assert_eq!(price_to_tick(price, exponent).unwrap(), tick);
        }
    }
}
