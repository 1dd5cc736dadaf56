// Token custody through the Soroban token interface

use soroban_sdk::{log, token, Address, Env};
use tidepool_math::TidepoolError;
use tidepool_position::Bank;

pub struct TokenBank<'a> {
    env: &'a Env,
}

impl<'a> TokenBank<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl Bank for TokenBank<'_> {
    fn transfer(
        &mut self,
        token: &Address,
        amount: i128,
        from: &Address,
        to: &Address,
    ) -> Result<(), TidepoolError> {
        match token::Client::new(self.env, token).try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "transfer failed", token.clone(), amount);
                Err(TidepoolError::TransferFailed)
            }
        }
    }
}
