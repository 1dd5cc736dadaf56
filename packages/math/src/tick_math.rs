// SPDX-License-Identifier: MIT
// Tick <-> price conversion
//
// Ticks are laid out on a geometric grid anchored at price one. Every
// decade of price holds 9 * 10^(-exponent_at_price_one) ticks and each
// tick in a decade moves price by the same additive increment. Above
// price one the increment for decade k is 10^(exponent + k); below it
// the grid mirrors with the exponent shifted down one extra step.

use crate::constants::{
    MAX_EXPONENT_AT_PRICE_ONE, MAX_SPOT_PRICE_EXPONENT, MAX_SPOT_PRICE_RAW,
    MIN_EXPONENT_AT_PRICE_ONE, PRECISION, TICKS_PER_DECADE_MULTIPLIER,
};
use crate::dec::Dec;
use crate::error::TidepoolError;

// ============================================================
// GRID PARAMETERS
// ============================================================

/// Rejects exponents outside the supported granularity range
pub fn validate_exponent_at_price_one(exponent_at_price_one: i32) -> Result<(), TidepoolError> {
    if !(MIN_EXPONENT_AT_PRICE_ONE..=MAX_EXPONENT_AT_PRICE_ONE).contains(&exponent_at_price_one) {
        return Err(TidepoolError::InvalidExponentAtPriceOne);
    }
    Ok(())
}

/// Number of ticks spanning one decade of price
pub fn ticks_per_decade(exponent_at_price_one: i32) -> Result<i64, TidepoolError> {
    validate_exponent_at_price_one(exponent_at_price_one)?;
    10_i64
        .checked_pow((-exponent_at_price_one) as u32)
        .and_then(|scale| scale.checked_mul(TICKS_PER_DECADE_MULTIPLIER))
        .ok_or(TidepoolError::Overflow)
}

/// Power of ten of the lowest spot price a grid can encode
///
/// Ticks in the bottom decade move price by 10^(exponent + min exponent),
/// which this pins to 10^-18, the last digit `Dec` holds.
pub fn min_spot_price_exponent(exponent_at_price_one: i32) -> Result<i32, TidepoolError> {
    validate_exponent_at_price_one(exponent_at_price_one)?;
    Ok(-(PRECISION as i32 + exponent_at_price_one))
}

pub fn min_spot_price(exponent_at_price_one: i32) -> Result<Dec, TidepoolError> {
    Dec::pow10(min_spot_price_exponent(exponent_at_price_one)?)
}

/// Ticks encoding the lowest and highest spot price of a grid
///
/// Both bounds are exact powers of ten and therefore sit on decade
/// boundaries of the grid.
pub fn min_max_ticks(exponent_at_price_one: i32) -> Result<(i64, i64), TidepoolError> {
    let distance = ticks_per_decade(exponent_at_price_one)?;
    let min_exponent = min_spot_price_exponent(exponent_at_price_one)?;
    Ok((
        distance * min_exponent as i64,
        distance * MAX_SPOT_PRICE_EXPONENT as i64,
    ))
}

fn decade_span(exponent_at_current_tick: i32, exponent_at_price_one: i32) -> Result<Dec, TidepoolError> {
    Dec::pow10(exponent_at_current_tick - exponent_at_price_one)?
        .checked_mul(Dec::from_int(TICKS_PER_DECADE_MULTIPLIER as i128)?)
}

// ============================================================
// TICK -> PRICE
// ============================================================

/// Spot price at a tick
pub fn tick_to_price(tick: i64, exponent_at_price_one: i32) -> Result<Dec, TidepoolError> {
    if tick == 0 {
        validate_exponent_at_price_one(exponent_at_price_one)?;
        return Ok(Dec::ONE);
    }

    let (min_tick, max_tick) = min_max_ticks(exponent_at_price_one)?;
    if tick < min_tick || tick > max_tick {
        return Err(TidepoolError::InvalidTick);
    }

    let distance = ticks_per_decade(exponent_at_price_one)?;

    // Whole decades passed, truncated toward zero
    let geometric_exponent_delta = tick / distance;
    let mut exponent_at_current_tick = exponent_at_price_one + geometric_exponent_delta as i32;
    if tick < 0 {
        exponent_at_current_tick -= 1;
    }

    let base = Dec::pow10(geometric_exponent_delta as i32)?;
    let num_additive_ticks = tick - geometric_exponent_delta * distance;
    if num_additive_ticks == 0 {
        return Ok(base);
    }

    let increment = Dec::pow10(exponent_at_current_tick)?;
    let additive = increment
        .raw()
        .checked_mul(num_additive_ticks as i128)
        .ok_or(TidepoolError::Overflow)?;

    base.checked_add(Dec::from_raw(additive))
}

/// Square root of the spot price at a tick
pub fn tick_to_sqrt_price(tick: i64, exponent_at_price_one: i32) -> Result<Dec, TidepoolError> {
    tick_to_price(tick, exponent_at_price_one)?.sqrt()
}

/// Square-root prices at both ends of a tick range
pub fn ticks_to_sqrt_price(
    lower_tick: i64,
    upper_tick: i64,
    exponent_at_price_one: i32,
) -> Result<(Dec, Dec), TidepoolError> {
    if lower_tick >= upper_tick {
        return Err(TidepoolError::InvalidTick);
    }

    let sqrt_price_lower = tick_to_sqrt_price(lower_tick, exponent_at_price_one)?;
    let sqrt_price_upper = tick_to_sqrt_price(upper_tick, exponent_at_price_one)?;

    Ok((sqrt_price_lower, sqrt_price_upper))
}

// ============================================================
// PRICE -> TICK
// ============================================================

/// Tick whose price is nearest to `price`
pub fn price_to_tick(price: Dec, exponent_at_price_one: i32) -> Result<i64, TidepoolError> {
    if !price.is_positive() {
        return Err(TidepoolError::InvalidPrice);
    }
    let distance = ticks_per_decade(exponent_at_price_one)?;

    if price < min_spot_price(exponent_at_price_one)? || price > Dec::from_raw(MAX_SPOT_PRICE_RAW) {
        return Err(TidepoolError::PriceOutOfBounds);
    }
    if price == Dec::ONE {
        return Ok(0);
    }

    let mut current_price = Dec::ONE;
    let mut ticks_passed: i64 = 0;
    let mut exponent_at_current_tick = exponent_at_price_one;
    let mut current_additive_increment = Dec::pow10(exponent_at_price_one)?;

    // Walk whole decades until the target price is bracketed
    if price > Dec::ONE {
        while current_price < price {
            current_additive_increment = Dec::pow10(exponent_at_current_tick)?;
            current_price = current_price
                .checked_add(decade_span(exponent_at_current_tick, exponent_at_price_one)?)?;
            exponent_at_current_tick += 1;
            ticks_passed += distance;
        }
    } else {
        exponent_at_current_tick = exponent_at_price_one - 1;
        while current_price > price {
            current_additive_increment = Dec::pow10(exponent_at_current_tick)?;
            current_price = current_price
                .checked_sub(decade_span(exponent_at_current_tick, exponent_at_price_one)?)?;
            exponent_at_current_tick -= 1;
            ticks_passed -= distance;
        }
    }

    let ticks_to_fulfill = price
        .checked_sub(current_price)?
        .checked_quo(current_additive_increment)?
        .round_int();

    let ticks_to_fulfill = i64::try_from(ticks_to_fulfill).map_err(|_| TidepoolError::Overflow)?;
    ticks_passed
        .checked_add(ticks_to_fulfill)
        .ok_or(TidepoolError::Overflow)
}
