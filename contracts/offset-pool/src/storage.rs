use epoch_types::{EpochEntry, OffsetPoolConfig, OffsetPoolState, PoolError};
use soroban_sdk::{contracttype, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Config and State live in Instance storage (read on every call)
// - Each epoch slot is a separate Persistent entry (~50 bytes)
// - Share balances live under pool_shares::ShareKey
//
// A mutating call touches at most: State, two epoch slots (carry-forward
// source is only read), one share balance and the share supply, well
// inside the per-transaction write entry limit.
// ============================================================================

/// Storage keys for the pool contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Current pool state (Instance storage)
    State,
    /// Epoch slot: epoch index -> EpochEntry (Persistent storage)
    Epoch(u64),
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

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

// === Config ===

pub fn get_config(env: &Env) -> Result<OffsetPoolConfig, PoolError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_config(env: &Env, config: &OffsetPoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

pub fn get_state(env: &Env) -> Result<OffsetPoolState, PoolError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_state(env: &Env, state: &OffsetPoolState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Epoch slots ===

/// Slots never written read as empty
pub fn get_epoch_entry(env: &Env, epoch: u64) -> EpochEntry {
    let key = DataKey::Epoch(epoch);
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_default()
}

pub fn set_epoch_entry(env: &Env, epoch: u64, entry: &EpochEntry) {
    let key = DataKey::Epoch(epoch);
    env.storage().persistent().set(&key, entry);
    extend_persistent_ttl(env, &key);
}

pub fn has_epoch_entry(env: &Env, epoch: u64) -> bool {
    env.storage().persistent().has(&DataKey::Epoch(epoch))
}
