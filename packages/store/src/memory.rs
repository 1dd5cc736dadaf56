// In-memory store for package tests
#![cfg(any(test, feature = "testutils"))]

use core::fmt::Debug;
use soroban_sdk::{Env, IntoVal, Map, TryFromVal, Val};

use crate::Storage;

#[derive(Clone)]
pub struct MemoryStore {
    env: Env,
    entries: Map<Val, Val>,
}

impl MemoryStore {
    pub fn new(env: &Env) -> Self {
        Self {
            env: env.clone(),
            entries: Map::new(env),
        }
    }

    pub fn len(&self) -> u32 {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of every stored entry
    pub fn entries(&self) -> Map<Val, Val> {
        self.entries.clone()
    }
}

impl Storage for MemoryStore {
    fn env(&self) -> &Env {
        &self.env
    }

    fn has<K>(&self, key: &K) -> bool
    where
        K: IntoVal<Env, Val>,
    {
        self.entries.contains_key(key.into_val(&self.env))
    }

    fn get<K, V>(&self, key: &K) -> Option<V>
    where
        K: IntoVal<Env, Val>,
        V: TryFromVal<Env, Val>,
        <V as TryFromVal<Env, Val>>::Error: Debug,
    {
        self.entries
            .get(key.into_val(&self.env))
            .and_then(|value| V::try_from_val(&self.env, &value).ok())
    }

    fn set<K, V>(&mut self, key: &K, value: &V)
    where
        K: IntoVal<Env, Val>,
        V: IntoVal<Env, Val>,
    {
        let value: Val = value.into_val(&self.env);
        self.entries.set(key.into_val(&self.env), value);
    }

    fn remove<K>(&mut self, key: &K)
    where
        K: IntoVal<Env, Val>,
    {
        self.entries.remove(key.into_val(&self.env));
    }
}
