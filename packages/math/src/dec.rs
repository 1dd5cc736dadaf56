// SPDX-License-Identifier: MIT
// Fixed-point decimal arithmetic
//
// `Dec` carries 18 fractional digits in a signed 128-bit integer.
// Products and quotients are evaluated over 256 bits and narrowed back
// with an explicit overflow check, so every operation either returns an
// exact, directionally rounded result or an error.

use ethnum::{I256, U256};
use soroban_sdk::contracttype;

use crate::constants::{DEC_ONE_RAW, PRECISION};
use crate::error::TidepoolError;

/// Signed decimal with 18 fractional digits (`raw / 10^18`)
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Dec(i128);

// ============================================================
// 256-BIT HELPERS
// ============================================================

fn narrow(value: I256) -> Result<i128, TidepoolError> {
    if value > I256::from(i128::MAX) || value < I256::from(i128::MIN) {
        return Err(TidepoolError::Overflow);
    }
    Ok(value.as_i128())
}

/// `a * b / c` over 256 bits
///
/// Truncates toward zero, or rounds toward positive infinity when
/// `round_up` is set.
pub(crate) fn mul_div_raw(a: i128, b: i128, c: i128, round_up: bool) -> Result<i128, TidepoolError> {
    if c == 0 {
        return Err(TidepoolError::DivisionByZero);
    }

    let numerator = I256::from(a) * I256::from(b);
    let denominator = I256::from(c);
    let mut quotient = numerator / denominator;

    let inexact = numerator % denominator != I256::ZERO;
    let positive = numerator.is_negative() == denominator.is_negative();
    if round_up && inexact && positive {
        quotient += I256::ONE;
    }

    narrow(quotient)
}

/// Floor square root by Newton iteration
fn isqrt(n: U256) -> U256 {
    if n == U256::ZERO {
        return U256::ZERO;
    }

    let bits = 256 - n.leading_zeros();
    let mut x = U256::ONE << ((bits + 1) / 2);
    loop {
        let y = (x + n / x) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}

// ============================================================
// DEC
// ============================================================

impl Dec {
    pub const ZERO: Dec = Dec(0);
    pub const ONE: Dec = Dec(DEC_ONE_RAW);

    /// Wraps a raw 18-decimal value
    pub const fn from_raw(raw: i128) -> Self {
        Dec(raw)
    }

    /// Raw 18-decimal value
    pub const fn raw(self) -> i128 {
        self.0
    }

    /// Converts a whole number of units
    pub fn from_int(value: i128) -> Result<Self, TidepoolError> {
        value
            .checked_mul(DEC_ONE_RAW)
            .map(Dec)
            .ok_or(TidepoolError::Overflow)
    }

    /// 10^exponent, for exponents representable with 18 decimals
    pub fn pow10(exponent: i32) -> Result<Self, TidepoolError> {
        let shifted = exponent + PRECISION as i32;
        if shifted < 0 {
            return Err(TidepoolError::Overflow);
        }
        10_i128
            .checked_pow(shifted as u32)
            .map(Dec)
            .ok_or(TidepoolError::Overflow)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_neg(self) -> Result<Self, TidepoolError> {
        self.0.checked_neg().map(Dec).ok_or(TidepoolError::Overflow)
    }

    pub fn checked_abs(self) -> Result<Self, TidepoolError> {
        self.0.checked_abs().map(Dec).ok_or(TidepoolError::Overflow)
    }

    pub fn checked_add(self, rhs: Dec) -> Result<Self, TidepoolError> {
        self.0.checked_add(rhs.0).map(Dec).ok_or(TidepoolError::Overflow)
    }

    pub fn checked_sub(self, rhs: Dec) -> Result<Self, TidepoolError> {
        self.0.checked_sub(rhs.0).map(Dec).ok_or(TidepoolError::Overflow)
    }

    /// Product truncated toward zero
    pub fn checked_mul(self, rhs: Dec) -> Result<Self, TidepoolError> {
        mul_div_raw(self.0, rhs.0, DEC_ONE_RAW, false).map(Dec)
    }

    /// Product rounded toward positive infinity
    pub fn checked_mul_round_up(self, rhs: Dec) -> Result<Self, TidepoolError> {
        mul_div_raw(self.0, rhs.0, DEC_ONE_RAW, true).map(Dec)
    }

    /// Quotient truncated toward zero
    pub fn checked_quo(self, rhs: Dec) -> Result<Self, TidepoolError> {
        mul_div_raw(self.0, DEC_ONE_RAW, rhs.0, false).map(Dec)
    }

    /// Quotient rounded toward positive infinity
    pub fn checked_quo_round_up(self, rhs: Dec) -> Result<Self, TidepoolError> {
        mul_div_raw(self.0, DEC_ONE_RAW, rhs.0, true).map(Dec)
    }

    /// `self * mul / div` with a single rounding step
    pub fn checked_mul_quo(self, mul: Dec, div: Dec, round_up: bool) -> Result<Self, TidepoolError> {
        mul_div_raw(self.0, mul.0, div.0, round_up).map(Dec)
    }

    /// Square root rounded down to the last decimal digit
    pub fn sqrt(self) -> Result<Self, TidepoolError> {
        if self.0 < 0 {
            return Err(TidepoolError::InvalidPrice);
        }
        let scaled = U256::from(self.0 as u128) * U256::from(DEC_ONE_RAW as u128);
        // sqrt(i128::MAX * 10^18) < 2^127, so the root always narrows
        Ok(Dec(isqrt(scaled).as_u128() as i128))
    }

    /// Integer part, dropping the fraction toward zero
    pub fn truncate_int(self) -> i128 {
        self.0 / DEC_ONE_RAW
    }

    /// Smallest integer not below the value
    pub fn ceil_int(self) -> i128 {
        let quotient = self.0 / DEC_ONE_RAW;
        if self.0 % DEC_ONE_RAW > 0 {
            quotient + 1
        } else {
            quotient
        }
    }

    /// Nearest integer, halves rounded away from zero
    pub fn round_int(self) -> i128 {
        let quotient = self.0 / DEC_ONE_RAW;
        let remainder = self.0 % DEC_ONE_RAW;
        if remainder.unsigned_abs() * 2 >= DEC_ONE_RAW as u128 {
            quotient + remainder.signum()
        } else {
            quotient
        }
    }
}
