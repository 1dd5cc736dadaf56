// Tidepool Store Package
//
// Key/value seam shared by the tick, accumulator and position packages,
// with a persistent backend, a staged overlay for all-or-nothing scopes,
// and an in-memory backend for tests.

#![no_std]

pub mod memory;
pub mod persistent;
pub mod staged;

use core::fmt::Debug;
use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

#[cfg(any(test, feature = "testutils"))]
pub use memory::MemoryStore;
pub use persistent::PersistentStore;
pub use staged::StagedStore;

/// Key/value storage over host-convertible contract types
pub trait Storage {
    fn env(&self) -> &Env;

    fn has<K>(&self, key: &K) -> bool
    where
        K: IntoVal<Env, Val>;

    fn get<K, V>(&self, key: &K) -> Option<V>
    where
        K: IntoVal<Env, Val>,
        V: TryFromVal<Env, Val>,
        <V as TryFromVal<Env, Val>>::Error: Debug;

    fn set<K, V>(&mut self, key: &K, value: &V)
    where
        K: IntoVal<Env, Val>,
        V: IntoVal<Env, Val>;

    fn remove<K>(&mut self, key: &K)
    where
        K: IntoVal<Env, Val>;
}
