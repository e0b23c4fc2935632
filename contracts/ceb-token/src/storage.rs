use soroban_sdk::{contracttype, Address, Env};

use crate::TokenError;

/// Storage keys for the token contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Token owner (Instance storage)
    Owner,
    /// Current total supply (Instance storage)
    TotalSupply,
    /// Holder balance (Persistent storage)
    Balance(Address),
    /// Burn-exemption flag (Persistent storage)
    Whitelist(Address),
    /// Allowance granted by a holder to a spender (Persistent storage)
    Allowance(Address, Address),
}

/// An allowance is only spendable until its expiration ledger
#[contracttype]
#[derive(Clone)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Owner ===

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("Not initialized")
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    extend_instance_ttl(env);
}

// === Total supply ===

pub fn get_total_supply(env: &Env) -> i128 {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .expect("Not initialized")
}

pub fn set_total_supply(env: &Env, total_supply: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalSupply, &total_supply);
    extend_instance_ttl(env);
}

// === Balances ===

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    if amount == 0 {
        // Remove empty balance entry
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent_ttl(env, &key);
    }
}

// === Whitelist ===

pub fn is_whitelisted(env: &Env, id: &Address) -> bool {
    let key = DataKey::Whitelist(id.clone());
    env.storage().persistent().get(&key).unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, id: &Address, whitelisted: bool) {
    let key = DataKey::Whitelist(id.clone());
    if whitelisted {
        env.storage().persistent().set(&key, &true);
        extend_persistent_ttl(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// === Allowances ===

pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    match env
        .storage()
        .persistent()
        .get::<DataKey, AllowanceValue>(&key)
    {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => {
            allowance.amount
        }
        _ => 0,
    }
}

pub fn set_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        let allowance = AllowanceValue {
            amount,
            expiration_ledger,
        };
        env.storage().persistent().set(&key, &allowance);
        extend_persistent_ttl(env, &key);
    }
}

/// Deduct `amount` from the live allowance, keeping its expiration
pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    let allowance = env
        .storage()
        .persistent()
        .get::<DataKey, AllowanceValue>(&key);

    match allowance {
        Some(a) if a.expiration_ledger >= env.ledger().sequence() && a.amount >= amount => {
            set_allowance(env, from, spender, a.amount - amount, a.expiration_ledger);
            Ok(())
        }
        _ => Err(TokenError::InsufficientAllowance),
    }
}
