#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, token::StellarAssetClient, Address, Env};
use tidepool_manager::{CreatePoolParams, CreatePositionParams, TidepoolManager, TidepoolManagerClient};

pub const EXPONENT: i32 = -6;
pub const SPACING: u64 = 100;
pub const STARTING_BALANCE: i128 = 100_000_000;

pub struct TestEnv<'a> {
    pub env: Env,
    pub client: TidepoolManagerClient<'a>,
    pub admin: Address,
    pub token0: Address,
    pub token1: Address,
}

pub fn setup_manager<'a>(env: &Env) -> (TidepoolManagerClient<'a>, Address) {
    let admin = Address::generate(env);
    let manager_id = env.register(TidepoolManager, ());
    let client = TidepoolManagerClient::new(env, &manager_id);
    client.initialize(&admin);
    (client, admin)
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn setup<'a>() -> TestEnv<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let (client, admin) = setup_manager(&env);
    let token0 = create_token(&env);
    let token1 = create_token(&env);

    TestEnv {
        env,
        client,
        admin,
        token0,
        token1,
    }
}

pub fn pool_params(t: &TestEnv) -> CreatePoolParams {
    CreatePoolParams {
        token0: t.token0.clone(),
        token1: t.token1.clone(),
        tick_spacing: SPACING,
        exponent_at_price_one: EXPONENT,
    }
}

pub fn position_params(pool_id: u64, lower_tick: i64, upper_tick: i64) -> CreatePositionParams {
    CreatePositionParams {
        pool_id,
        amount0_desired: 1_000_000,
        amount1_desired: 5_000_000,
        amount0_min: 0,
        amount1_min: 0,
        lower_tick,
        upper_tick,
    }
}

pub fn funded_user(t: &TestEnv) -> Address {
    let user = Address::generate(&t.env);
    mint_tokens(&t.env, &t.token0, &user, STARTING_BALANCE);
    mint_tokens(&t.env, &t.token1, &user, STARTING_BALANCE);
    user
}
