// Token custody seam

use soroban_sdk::Address;
use tidepool_accum::Coins;
use tidepool_math::TidepoolError;

/// Moves tokens between accounts
///
/// A failed transfer must leave balances untouched.
pub trait Bank {
    fn transfer(
        &mut self,
        token: &Address,
        amount: i128,
        from: &Address,
        to: &Address,
    ) -> Result<(), TidepoolError>;
}

/// Transfers a pair of pool token amounts from `sender` to `recipient`
///
/// Zero amounts are skipped.
pub fn send_between_pool_and_user<B: Bank>(
    bank: &mut B,
    token0: &Address,
    token1: &Address,
    amount0: i128,
    amount1: i128,
    sender: &Address,
    recipient: &Address,
) -> Result<(), TidepoolError> {
    if amount0 < 0 || amount1 < 0 {
        return Err(TidepoolError::NegativeTransferAmount);
    }
    if amount0 > 0 {
        bank.transfer(token0, amount0, sender, recipient)?;
    }
    if amount1 > 0 {
        bank.transfer(token1, amount1, sender, recipient)?;
    }
    Ok(())
}

/// Transfers every denomination in `coins`
pub fn send_coins<B: Bank>(
    bank: &mut B,
    coins: &Coins,
    sender: &Address,
    recipient: &Address,
) -> Result<(), TidepoolError> {
    for (token, amount) in coins.iter() {
        if amount < 0 {
            return Err(TidepoolError::NegativeTransferAmount);
        }
        if amount > 0 {
            bank.transfer(&token, amount, sender, recipient)?;
        }
    }
    Ok(())
}
