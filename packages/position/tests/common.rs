#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, Address, Env, Map};
use tidepool_math::{Dec, TidepoolError};
use tidepool_position::{create_pool, init_id_counters, Bank, Pool};
use tidepool_store::MemoryStore;

pub const EXPONENT: i32 = -6;
pub const SPACING: u64 = 100;

/// In-memory balances keyed by (token, account)
pub struct MockBank {
    pub balances: Map<(Address, Address), i128>,
    pub fail: bool,
}

impl MockBank {
    pub fn new(env: &Env) -> Self {
        Self {
            balances: Map::new(env),
            fail: false,
        }
    }

    pub fn balance(&self, token: &Address, account: &Address) -> i128 {
        self.balances
            .get((token.clone(), account.clone()))
            .unwrap_or(0)
    }

    pub fn mint(&mut self, token: &Address, account: &Address, amount: i128) {
        let balance = self.balance(token, account);
        self.balances
            .set((token.clone(), account.clone()), balance + amount);
    }
}

impl Bank for MockBank {
    fn transfer(
        &mut self,
        token: &Address,
        amount: i128,
        from: &Address,
        to: &Address,
    ) -> Result<(), TidepoolError> {
        let from_balance = self.balance(token, from);
        if self.fail || amount < 0 || from_balance < amount {
            return Err(TidepoolError::TransferFailed);
        }
        let to_balance = self.balance(token, to);
        self.balances
            .set((token.clone(), from.clone()), from_balance - amount);
        self.balances
            .set((token.clone(), to.clone()), to_balance + amount);
        Ok(())
    }
}

pub struct Setup {
    pub env: Env,
    pub store: MemoryStore,
    pub bank: MockBank,
    pub pool: Pool,
    pub owner: Address,
}

pub fn setup() -> Setup {
    let env = Env::default();
    let mut store = MemoryStore::new(&env);
    init_id_counters(&mut store).unwrap();

    let pool_address = Address::generate(&env);
    let token0 = Address::generate(&env);
    let token1 = Address::generate(&env);
    let pool = create_pool(&mut store, &pool_address, &token0, &token1, SPACING, EXPONENT).unwrap();

    let mut bank = MockBank::new(&env);
    let owner = Address::generate(&env);
    bank.mint(&pool.token0, &owner, 100_000_000);
    bank.mint(&pool.token1, &owner, 100_000_000);

    Setup {
        env,
        store,
        bank,
        pool,
        owner,
    }
}

pub fn funded_user(s: &mut Setup) -> Address {
    let user = Address::generate(&s.env);
    s.bank.mint(&s.pool.token0, &user, 100_000_000);
    s.bank.mint(&s.pool.token1, &user, 100_000_000);
    user
}

pub fn dec(units: i128) -> Dec {
    Dec::from_int(units).unwrap()
}
