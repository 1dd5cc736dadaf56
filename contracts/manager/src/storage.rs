// Manager storage: admin and initialization flag

use soroban_sdk::{contracttype, Address, Env};
use tidepool_math::TidepoolError;
use tidepool_store::{PersistentStore, Storage};

#[contracttype]
pub enum ManagerKey {
    Admin,
    Initialized,
}

pub fn is_initialized(env: &Env) -> bool {
    PersistentStore::new(env).has(&ManagerKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    PersistentStore::new(env).set(&ManagerKey::Initialized, &true);
}

pub fn write_admin(env: &Env, admin: &Address) {
    PersistentStore::new(env).set(&ManagerKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, TidepoolError> {
    PersistentStore::new(env)
        .get(&ManagerKey::Admin)
        .ok_or(TidepoolError::NotInitialized)
}

pub fn require_initialized(env: &Env) -> Result<(), TidepoolError> {
    if !is_initialized(env) {
        return Err(TidepoolError::NotInitialized);
    }
    Ok(())
}
