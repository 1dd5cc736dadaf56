// Staged overlay: an all-or-nothing mutation scope over any store

use core::fmt::Debug;
use soroban_sdk::{Env, IntoVal, Map, TryFromVal, Val};

use crate::Storage;

/// Write-back overlay over a parent store
///
/// Reads see the overlay first and fall through to the parent. Nothing
/// reaches the parent until `commit`; dropping the scope discards every
/// pending write and removal.
pub struct StagedStore<'a, S: Storage> {
    parent: &'a mut S,
    writes: Map<Val, Val>,
    removed: Map<Val, bool>,
}

impl<'a, S: Storage> StagedStore<'a, S> {
    /// Opens a scope over `parent`
    pub fn begin(parent: &'a mut S) -> Self {
        let env = parent.env().clone();
        Self {
            parent,
            writes: Map::new(&env),
            removed: Map::new(&env),
        }
    }

    /// Number of keys touched inside the scope
    pub fn pending(&self) -> u32 {
        self.writes.len() + self.removed.len()
    }

    /// Flushes removals, then writes, into the parent
    pub fn commit(self) {
        let StagedStore { parent, writes, removed } = self;

        for key in removed.keys().iter() {
            parent.remove(&key);
        }
        for (key, value) in writes.iter() {
            parent.set(&key, &value);
        }
    }

    fn raw_key<K>(&self, key: &K) -> Val
    where
        K: IntoVal<Env, Val>,
    {
        key.into_val(self.parent.env())
    }
}

impl<'a, S: Storage> Storage for StagedStore<'a, S> {
    fn env(&self) -> &Env {
        self.parent.env()
    }

    fn has<K>(&self, key: &K) -> bool
    where
        K: IntoVal<Env, Val>,
    {
        let raw = self.raw_key(key);
        if self.removed.contains_key(raw) {
            return false;
        }
        self.writes.contains_key(raw) || self.parent.has(key)
    }

    fn get<K, V>(&self, key: &K) -> Option<V>
    where
        K: IntoVal<Env, Val>,
        V: TryFromVal<Env, Val>,
        <V as TryFromVal<Env, Val>>::Error: Debug,
    {
        let raw = self.raw_key(key);
        if self.removed.contains_key(raw) {
            return None;
        }
        match self.writes.get(raw) {
            Some(value) => V::try_from_val(self.env(), &value).ok(),
            None => self.parent.get(key),
        }
    }

    fn set<K, V>(&mut self, key: &K, value: &V)
    where
        K: IntoVal<Env, Val>,
        V: IntoVal<Env, Val>,
    {
        let raw = self.raw_key(key);
        let value: Val = value.into_val(self.parent.env());
        self.removed.remove(raw);
        self.writes.set(raw, value);
    }

    fn remove<K>(&mut self, key: &K)
    where
        K: IntoVal<Env, Val>,
    {
        let raw = self.raw_key(key);
        self.writes.remove(raw);
        self.removed.set(raw, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use soroban_sdk::{symbol_short, Symbol};

    #[test]
    fn test_writes_invisible_until_commit() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);
        store.set(&symbol_short!("a"), &1u32);

        {
            let mut scope = StagedStore::begin(&mut store);
            scope.set(&symbol_short!("a"), &2u32);
            scope.set(&symbol_short!("b"), &3u32);
            assert_eq!(scope.get::<Symbol, u32>(&symbol_short!("a")), Some(2));
            assert_eq!(scope.pending(), 2);
            // dropped without commit
        }

        assert_eq!(store.get::<Symbol, u32>(&symbol_short!("a")), Some(1));
        assert!(!store.has(&symbol_short!("b")));
    }

    #[test]
    fn test_commit_applies_writes_and_removals() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);
        store.set(&symbol_short!("a"), &1u32);
        store.set(&symbol_short!("gone"), &9u32);

        let mut scope = StagedStore::begin(&mut store);
        scope.set(&symbol_short!("a"), &5u32);
        scope.remove(&symbol_short!("gone"));
        assert!(!scope.has(&symbol_short!("gone")));
        scope.commit();

        assert_eq!(store.get::<Symbol, u32>(&symbol_short!("a")), Some(5));
        assert!(!store.has(&symbol_short!("gone")));
    }

    #[test]
    fn test_set_after_remove_restores_key() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);
        store.set(&symbol_short!("k"), &1u32);

        let mut scope = StagedStore::begin(&mut store);
        scope.remove(&symbol_short!("k"));
        scope.set(&symbol_short!("k"), &7u32);
        scope.commit();

        assert_eq!(store.get::<Symbol, u32>(&symbol_short!("k")), Some(7));
    }

    #[test]
    fn test_nested_scopes() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);

        let mut outer = StagedStore::begin(&mut store);
        {
            let mut inner = StagedStore::begin(&mut outer);
            inner.set(&symbol_short!("x"), &1u32);
            inner.commit();
        }
        assert!(outer.has(&symbol_short!("x")));
        drop(outer);

        assert!(!store.has(&symbol_short!("x")));
    }
}
