use epoch_types::{PoolError, SnapshotPoolConfig, SnapshotPoolState};
use soroban_sdk::{contracttype, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Config and State (which carries the live reserves) live in Instance storage
// - Each epoch's liquidity snapshot is a separate Persistent entry
// - Share balances live under pool_shares::ShareKey
// ============================================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Live reserves and observed epoch (Instance storage)
    State,
    /// Closed epoch -> floor(sqrt(reserve_a * reserve_b)) (Persistent storage)
    Snapshot(u64),
}

const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

// === Config ===

pub fn get_config(env: &Env) -> Result<SnapshotPoolConfig, PoolError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_config(env: &Env, config: &SnapshotPoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

pub fn get_state(env: &Env) -> Result<SnapshotPoolState, PoolError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_state(env: &Env, state: &SnapshotPoolState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Snapshots ===

/// Missing snapshots read as zero
pub fn get_snapshot(env: &Env, epoch: u64) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Snapshot(epoch))
        .unwrap_or(0)
}

pub fn has_snapshot(env: &Env, epoch: u64) -> bool {
    env.storage().persistent().has(&DataKey::Snapshot(epoch))
}

pub fn set_snapshot(env: &Env, epoch: u64, liquidity: u128) {
    let key = DataKey::Snapshot(epoch);
    env.storage().persistent().set(&key, &liquidity);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
