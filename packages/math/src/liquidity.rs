// SPDX-License-Identifier: MIT
// Liquidity Calculations
//
// Rounding rule: liquidity derived from amounts is truncated, amounts a
// depositor pays round up, amounts paid out round down.

use crate::dec::Dec;
use crate::error::TidepoolError;

fn ordered(sqrt_price_a: Dec, sqrt_price_b: Dec) -> (Dec, Dec) {
    if sqrt_price_a > sqrt_price_b {
        (sqrt_price_b, sqrt_price_a)
    } else {
        (sqrt_price_a, sqrt_price_b)
    }
}

/// Liquidity backed by `amount` of token0 between two sqrt prices
///
/// liquidity0 = amount * (sqrtA * sqrtB) / (sqrtB - sqrtA)
pub fn liquidity0(amount: Dec, sqrt_price_a: Dec, sqrt_price_b: Dec) -> Result<Dec, TidepoolError> {
    let (sqrt_lower, sqrt_upper) = ordered(sqrt_price_a, sqrt_price_b);
    let product = sqrt_lower.checked_mul(sqrt_upper)?;
    let diff = sqrt_upper.checked_sub(sqrt_lower)?;
    amount.checked_mul_quo(product, diff, false)
}

/// Liquidity backed by `amount` of token1 between two sqrt prices
///
/// liquidity1 = amount / (sqrtB - sqrtA)
pub fn liquidity1(amount: Dec, sqrt_price_a: Dec, sqrt_price_b: Dec) -> Result<Dec, TidepoolError> {
    let (sqrt_lower, sqrt_upper) = ordered(sqrt_price_a, sqrt_price_b);
    let diff = sqrt_upper.checked_sub(sqrt_lower)?;
    amount.checked_quo(diff)
}

/// Token0 represented by `liquidity` between two sqrt prices
///
/// amount0 = liquidity * (sqrtB - sqrtA) / (sqrtB * sqrtA)
pub fn calc_amount0_delta(
    liquidity: Dec,
    sqrt_price_a: Dec,
    sqrt_price_b: Dec,
    round_up: bool,
) -> Result<Dec, TidepoolError> {
    let (sqrt_lower, sqrt_upper) = ordered(sqrt_price_a, sqrt_price_b);
    let diff = sqrt_upper.checked_sub(sqrt_lower)?;

    let scaled = liquidity.checked_mul_quo(diff, sqrt_upper, round_up)?;
    if round_up {
        scaled.checked_quo_round_up(sqrt_lower)
    } else {
        scaled.checked_quo(sqrt_lower)
    }
}

/// Token1 represented by `liquidity` between two sqrt prices
///
/// amount1 = liquidity * (sqrtB - sqrtA)
pub fn calc_amount1_delta(
    liquidity: Dec,
    sqrt_price_a: Dec,
    sqrt_price_b: Dec,
    round_up: bool,
) -> Result<Dec, TidepoolError> {
    let (sqrt_lower, sqrt_upper) = ordered(sqrt_price_a, sqrt_price_b);
    let diff = sqrt_upper.checked_sub(sqrt_lower)?;

    if round_up {
        liquidity.checked_mul_round_up(diff)
    } else {
        liquidity.checked_mul(diff)
    }
}

/// Largest liquidity deployable in a range without exceeding either amount
pub fn get_liquidity_from_amounts(
    sqrt_price: Dec,
    sqrt_price_a: Dec,
    sqrt_price_b: Dec,
    amount0: i128,
    amount1: i128,
) -> Result<Dec, TidepoolError> {
    let (sqrt_lower, sqrt_upper) = ordered(sqrt_price_a, sqrt_price_b);
    let amount0 = Dec::from_int(amount0)?;
    let amount1 = Dec::from_int(amount1)?;

    if sqrt_price <= sqrt_lower {
        // Range sits above the price: token0 only
        liquidity0(amount0, sqrt_lower, sqrt_upper)
    } else if sqrt_price < sqrt_upper {
        let liquidity_0 = liquidity0(amount0, sqrt_price, sqrt_upper)?;
        let liquidity_1 = liquidity1(amount1, sqrt_price, sqrt_lower)?;
        Ok(liquidity_0.min(liquidity_1))
    } else {
        // Range sits below the price: token1 only
        liquidity1(amount1, sqrt_lower, sqrt_upper)
    }
}

/// Sqrt price at which a range's amounts are evaluated
///
/// The regime follows the current tick: below the range the lower bound
/// is used, at or above it the upper bound, and inside it the current
/// sqrt price clamped into `[sqrt_price_lower, sqrt_price_upper]`.
pub fn effective_sqrt_price(
    current_tick: i64,
    current_sqrt_price: Dec,
    lower_tick: i64,
    upper_tick: i64,
    sqrt_price_lower: Dec,
    sqrt_price_upper: Dec,
) -> Dec {
    if current_tick < lower_tick {
        sqrt_price_lower
    } else if current_tick >= upper_tick {
        sqrt_price_upper
    } else {
        current_sqrt_price.max(sqrt_price_lower).min(sqrt_price_upper)
    }
}

/// Token amounts owed for a signed liquidity change on a range
///
/// The range is active when `lower_tick <= current_tick < upper_tick`.
/// Positive deltas round up (depositor pays); negative deltas round the
/// magnitude down and come back negated (paid out to the owner).
pub fn calc_actual_amounts(
    current_tick: i64,
    current_sqrt_price: Dec,
    lower_tick: i64,
    upper_tick: i64,
    sqrt_price_lower: Dec,
    sqrt_price_upper: Dec,
    liquidity_delta: Dec,
) -> Result<(Dec, Dec), TidepoolError> {
    if liquidity_delta.is_zero() {
        return Ok((Dec::ZERO, Dec::ZERO));
    }

    let round_up = liquidity_delta.is_positive();
    let liquidity = liquidity_delta.checked_abs()?;

    let sqrt_price = effective_sqrt_price(
        current_tick,
        current_sqrt_price,
        lower_tick,
        upper_tick,
        sqrt_price_lower,
        sqrt_price_upper,
    );
    let amount0 = calc_amount0_delta(liquidity, sqrt_price, sqrt_price_upper, round_up)?;
    let amount1 = calc_amount1_delta(liquidity, sqrt_price, sqrt_price_lower, round_up)?;

    if round_up {
        Ok((amount0, amount1))
    } else {
        Ok((amount0.checked_neg()?, amount1.checked_neg()?))
    }
}
