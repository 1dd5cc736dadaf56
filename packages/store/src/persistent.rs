// Persistent host storage with TTL extension

use core::fmt::Debug;
use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

use crate::Storage;

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
pub const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// TTL bump threshold
pub const PERSISTENT_BUMP: u32 = 6_307_200;

/// Storage backed by `env.storage().persistent()`
///
/// Every write, and every read that finds an entry, extends the entry's
/// time to live.
#[derive(Clone)]
pub struct PersistentStore {
    env: Env,
}

impl PersistentStore {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    fn extend_ttl<K>(&self, key: &K)
    where
        K: IntoVal<Env, Val>,
    {
        self.env
            .storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
    }
}

impl Storage for PersistentStore {
    fn env(&self) -> &Env {
        &self.env
    }

    fn has<K>(&self, key: &K) -> bool
    where
        K: IntoVal<Env, Val>,
    {
        self.env.storage().persistent().has(key)
    }

    fn get<K, V>(&self, key: &K) -> Option<V>
    where
        K: IntoVal<Env, Val>,
        V: TryFromVal<Env, Val>,
        <V as TryFromVal<Env, Val>>::Error: Debug,
    {
        let value = self.env.storage().persistent().get(key);
        if value.is_some() {
            self.extend_ttl(key);
        }
        value
    }

    fn set<K, V>(&mut self, key: &K, value: &V)
    where
        K: IntoVal<Env, Val>,
        V: IntoVal<Env, Val>,
    {
        self.env.storage().persistent().set(key, value);
        self.extend_ttl(key);
    }

    fn remove<K>(&mut self, key: &K)
    where
        K: IntoVal<Env, Val>,
    {
        self.env.storage().persistent().remove(key);
    }
}
