use pool_types::{AdminStatus, AssetKind, PoolConfig, PoolState, TokenData};
use soroban_sdk::{contracttype, Address, Env, Map, Vec};

/// Storage keys for the pool contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Current pool state (Instance storage)
    State,
    /// Fixed list of tracked assets, set once at init (Instance storage)
    Assets,
    /// Administrator set with propose/accept status (Instance storage)
    Admins,
    /// Per-asset ledger entry: kind -> TokenData (Persistent storage)
    Asset(AssetKind),
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

pub fn get_config(env: &Env) -> PoolConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Pool not initialized")
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

pub fn get_state(env: &Env) -> PoolState {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .expect("Pool not initialized")
}

pub fn set_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Tracked assets ===

pub fn get_asset_list(env: &Env) -> Vec<AssetKind> {
    env.storage()
        .instance()
        .get(&DataKey::Assets)
        .expect("Pool not initialized")
}

pub fn set_asset_list(env: &Env, assets: &Vec<AssetKind>) {
    env.storage().instance().set(&DataKey::Assets, assets);
}

pub fn get_asset(env: &Env, kind: &AssetKind) -> TokenData {
    let key = DataKey::Asset(kind.clone());
    env.storage()
        .persistent()
        .get(&key)
        .expect("Unknown asset")
}

pub fn set_asset(env: &Env, kind: &AssetKind, data: &TokenData) {
    let key = DataKey::Asset(kind.clone());
    env.storage().persistent().set(&key, data);
    extend_persistent_ttl(env, &key);
}

// === Administrators ===

pub fn get_admins(env: &Env) -> Map<Address, AdminStatus> {
    env.storage()
        .instance()
        .get(&DataKey::Admins)
        .unwrap_or_else(|| Map::new(env))
}

pub fn set_admins(env: &Env, admins: &Map<Address, AdminStatus>) {
    env.storage().instance().set(&DataKey::Admins, admins);
    extend_instance_ttl(env);
}
