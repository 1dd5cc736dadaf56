// Error handling for the Tidepool position manager
//
// A single contracterror enum is shared by every package so that the
// contract surface can return any failure without translation.
// Codes are grouped by category in blocks of one hundred.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TidepoolError {
    // Initialization errors (100-199)
    /// Contract or id counters already seeded
    AlreadyInitialized = 100,
    /// Contract or id counters not seeded yet
    NotInitialized = 101,
    /// Pool has no price yet (no position was ever created)
    PoolNotInitialized = 102,

    // Validation errors (200-299)
    /// Tick outside the representable range for the exponent
    InvalidTick = 200,
    /// Tick range misaligned, out of bounds, or lower >= upper
    InvalidTickRange = 201,
    /// Tick is not a multiple of the pool tick spacing
    TickNotAligned = 202,
    /// Price must be strictly positive
    InvalidPrice = 203,
    /// Exponent at price one outside [-12, -1]
    InvalidExponentAtPriceOne = 204,
    /// Tick spacing must be positive
    InvalidTickSpacing = 205,
    /// First position of a pool must deposit both tokens
    ZeroInitialLiquidity = 206,
    /// Desired amounts produce no liquidity
    ZeroLiquidity = 207,
    /// Liquidity to withdraw must be positive
    InvalidLiquidityAmount = 208,
    /// Pool tokens must differ
    SameToken = 209,
    /// Spot price outside the range the grid can encode
    PriceOutOfBounds = 210,
    /// Token amounts must not be negative
    InvalidAmount = 211,

    // Not-found errors (300-399)
    PoolNotFound = 300,
    PositionNotFound = 301,
    AccumulatorNotFound = 302,
    AccumulatorPositionNotFound = 303,
    /// Position already registered with the accumulator
    AccumulatorPositionExists = 304,

    // Threshold errors (400-499)
    /// Actual token0 amount below the caller's minimum
    InsufficientAmount0 = 400,
    /// Actual token1 amount below the caller's minimum
    InsufficientAmount1 = 401,
    /// Requested withdrawal exceeds position liquidity
    InsufficientLiquidity = 402,
    /// Removing more accumulator shares than held
    InsufficientShares = 403,
    /// Rewards added while no shares are registered
    NoSharesToReward = 404,
    /// Share change of zero
    ZeroShares = 405,

    // Invariant errors (500-599)
    /// Accumulator value below a recorded snapshot
    InvalidAccumulatorValue = 500,
    /// Custody asked to move a negative amount
    NegativeTransferAmount = 501,
    /// Tick gross liquidity would become negative
    TickLiquidityUnderflow = 502,

    // Authorization / custody errors (600-699)
    NotPositionOwner = 601,
    TransferFailed = 602,

    // Math errors (700-799)
    DivisionByZero = 700,
    Overflow = 701,
}
