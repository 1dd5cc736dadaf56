use tidepool_math::{min_max_ticks, TidepoolError};

/// Checks a position range against the pool grid
///
/// Both ticks must be multiples of `tick_spacing`, inside the grid bounds
/// for `exponent_at_price_one`, with `lower_tick < upper_tick`.
pub fn validate_tick_range(
    tick_spacing: u64,
    exponent_at_price_one: i32,
    lower_tick: i64,
    upper_tick: i64,
) -> Result<(), TidepoolError> {
    let spacing = i64::try_from(tick_spacing).map_err(|_| TidepoolError::InvalidTickSpacing)?;
    if spacing <= 0 {
        return Err(TidepoolError::InvalidTickSpacing);
    }

    if lower_tick % spacing != 0 || upper_tick % spacing != 0 {
        return Err(TidepoolError::InvalidTickRange);
    }

    let (min_tick, max_tick) = min_max_ticks(exponent_at_price_one)?;
    if lower_tick < min_tick || upper_tick > max_tick || lower_tick >= upper_tick {
        return Err(TidepoolError::InvalidTickRange);
    }

    Ok(())
}

/// Token amounts supplied by a caller may not be negative
pub fn validate_amounts(amounts: &[i128]) -> Result<(), TidepoolError> {
    if amounts.iter().any(|amount| *amount < 0) {
        return Err(TidepoolError::InvalidAmount);
    }
    Ok(())
}
