#![allow(dead_code)]

use soroban_sdk::{symbol_short, testutils::Address as _, Address, Env, Map};
use tidepool_accum::{AccumName, Coins, DecCoins};
use tidepool_math::Dec;

pub fn dec(units: i128) -> Dec {
    Dec::from_int(units).unwrap()
}

pub fn fee_name(id: u64) -> AccumName {
    AccumName {
        prefix: symbol_short!("fee"),
        id,
    }
}

pub fn denoms(env: &Env) -> (Address, Address) {
    (Address::generate(env), Address::generate(env))
}

pub fn dec_coins(env: &Env, entries: &[(&Address, Dec)]) -> DecCoins {
    let mut coins = Map::new(env);
    for (denom, amount) in entries {
        coins.set((*denom).clone(), *amount);
    }
    coins
}

pub fn coins(env: &Env, entries: &[(&Address, i128)]) -> Coins {
    let mut coins = Map::new(env);
    for (denom, amount) in entries {
        coins.set((*denom).clone(), *amount);
    }
    coins
}
