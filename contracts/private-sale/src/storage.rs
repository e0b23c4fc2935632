use soroban_sdk::{contracttype, Address, Env};

/// Sale parameters, fixed at initialization
#[contracttype]
#[derive(Clone)]
pub struct SaleConfig {
    pub owner: Address,
    /// Token being sold; the sale contract's own balance funds the claims
    pub sale_token: Address,
    /// External token collected as payment
    pub pay_token: Address,
    /// Payment proceeds go straight here, never resting in the contract
    pub receiver: Address,
    /// Payment units per sale-token unit
    pub token_price: i128,
    /// Earliest timestamp at which claims are honored
    pub unlock_date: u64,
}

/// Storage keys for the sale contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Sale configuration (Instance storage)
    Config,
    /// Buyer permitted to purchase (Persistent storage)
    Whitelist(Address),
    /// Unclaimed sale-token units owed to a buyer (Persistent storage)
    Credited(Address),
    /// Set once a buyer has claimed; sticky (Persistent storage)
    Claimed(Address),
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

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> SaleConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Not initialized")
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Whitelist ===

pub fn is_whitelisted(env: &Env, buyer: &Address) -> bool {
    let key = DataKey::Whitelist(buyer.clone());
    env.storage().persistent().get(&key).unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, buyer: &Address) {
    let key = DataKey::Whitelist(buyer.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent_ttl(env, &key);
}

// === Credit ===

pub fn get_credited(env: &Env, buyer: &Address) -> i128 {
    let key = DataKey::Credited(buyer.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_credited(env: &Env, buyer: &Address, amount: i128) {
    let key = DataKey::Credited(buyer.clone());
    if amount == 0 {
        // Remove empty credit entry
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent_ttl(env, &key);
    }
}

// === Claimed flag ===

pub fn is_claimed(env: &Env, buyer: &Address) -> bool {
    let key = DataKey::Claimed(buyer.clone());
    env.storage().persistent().get(&key).unwrap_or(false)
}

pub fn set_claimed(env: &Env, buyer: &Address) {
    let key = DataKey::Claimed(buyer.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent_ttl(env, &key);
}
