// Constants for the Tidepool math package
//
// Grouped by functionality. Decimal constants are expressed as raw
// 18-decimal fixed-point values.

// ============================================================
// DECIMAL PRECISION
// ============================================================

/// Number of fractional digits carried by `Dec`
pub const PRECISION: u32 = 18;

/// 10^PRECISION, the raw representation of 1.0
pub const DEC_ONE_RAW: i128 = 1_000_000_000_000_000_000;

// ============================================================
// TICK ENCODING
// ============================================================

/// Smallest allowed exponent at price one (finest tick granularity)
pub const MIN_EXPONENT_AT_PRICE_ONE: i32 = -12;

/// Largest allowed exponent at price one (coarsest tick granularity)
pub const MAX_EXPONENT_AT_PRICE_ONE: i32 = -1;

/// Every decade of price holds 9 * 10^(-exponent) ticks
pub const TICKS_PER_DECADE_MULTIPLIER: i64 = 9;

// ============================================================
// PRICE BOUNDS
// ============================================================

/// Highest spot price any tick may encode, as a power of ten
///
/// The lowest price depends on the grid; see `min_spot_price_exponent`.
pub const MAX_SPOT_PRICE_EXPONENT: i32 = 20;

/// 10^20
pub const MAX_SPOT_PRICE_RAW: i128 = 10_i128.pow(20) * DEC_ONE_RAW;
