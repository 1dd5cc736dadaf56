// Multi-denomination amounts
//
// Maps never hold zero entries, so equal amounts compare equal.

use soroban_sdk::{Address, Map};
use tidepool_math::{Dec, TidepoolError};

/// Decimal amounts keyed by token
pub type DecCoins = Map<Address, Dec>;

/// Whole-unit amounts keyed by token
pub type Coins = Map<Address, i128>;

fn put(coins: &mut DecCoins, denom: Address, amount: Dec) {
    if amount.is_zero() {
        coins.remove(denom);
    } else {
        coins.set(denom, amount);
    }
}

pub fn is_any_negative(coins: &DecCoins) -> bool {
    coins.values().iter().any(|amount| amount.is_negative())
}

pub fn add(a: &DecCoins, b: &DecCoins) -> Result<DecCoins, TidepoolError> {
    let mut out = a.clone();
    for (denom, amount) in b.iter() {
        let sum = out.get(denom.clone()).unwrap_or_default().checked_add(amount)?;
        put(&mut out, denom, sum);
    }
    Ok(out)
}

/// `a - b`, failing if any denomination would go negative
pub fn safe_sub(a: &DecCoins, b: &DecCoins) -> Result<DecCoins, TidepoolError> {
    let mut out = a.clone();
    for (denom, amount) in b.iter() {
        let diff = out.get(denom.clone()).unwrap_or_default().checked_sub(amount)?;
        if diff.is_negative() {
            return Err(TidepoolError::InvalidAccumulatorValue);
        }
        put(&mut out, denom, diff);
    }
    Ok(out)
}

/// Scales every denomination, truncating toward zero
///
/// Each call drops under 1e-18 per denomination, so a record settled `n`
/// times trails an unsettled twin by at most `n` raw units.
pub fn mul_dec(coins: &DecCoins, factor: Dec) -> Result<DecCoins, TidepoolError> {
    let mut out = Map::new(coins.env());
    for (denom, amount) in coins.iter() {
        put(&mut out, denom, amount.checked_mul(factor)?);
    }
    Ok(out)
}

/// Divides every denomination, truncating toward zero
pub fn quo_dec(coins: &DecCoins, divisor: Dec) -> Result<DecCoins, TidepoolError> {
    let mut out = Map::new(coins.env());
    for (denom, amount) in coins.iter() {
        put(&mut out, denom, amount.checked_quo(divisor)?);
    }
    Ok(out)
}

/// Splits into whole units and the fractional remainder
pub fn truncate(coins: &DecCoins) -> Result<(Coins, DecCoins), TidepoolError> {
    let mut whole = Map::new(coins.env());
    let mut dust = Map::new(coins.env());
    for (denom, amount) in coins.iter() {
        let units = amount.truncate_int();
        if units != 0 {
            whole.set(denom.clone(), units);
        }
        put(&mut dust, denom, amount.checked_sub(Dec::from_int(units)?)?);
    }
    Ok((whole, dust))
}

/// Lifts whole-unit amounts into decimals
pub fn from_coins(coins: &Coins) -> Result<DecCoins, TidepoolError> {
    let mut out = Map::new(coins.env());
    for (denom, amount) in coins.iter() {
        put(&mut out, denom, Dec::from_int(amount)?);
    }
    Ok(out)
}
