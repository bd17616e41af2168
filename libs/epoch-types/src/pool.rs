use crate::{EpochClock, EpochOffsets};
use soroban_sdk::{contracttype, Address};

/// Reserve and share-supply slot of a single epoch (offset pool)
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EpochEntry {
    pub reserve_a: u128,
    pub reserve_b: u128,
    pub total_shares: u128,
}

impl EpochEntry {
    pub fn new(reserve_a: u128, reserve_b: u128, total_shares: u128) -> Self {
        Self {
            reserve_a,
            reserve_b,
            total_shares,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reserve_a == 0 && self.reserve_b == 0 && self.total_shares == 0
    }
}

/// Direction of an offset-pool swap
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwapDirection {
    /// Pay token A, receive token B
    AToB,
    /// Pay token B, receive token A
    BToA,
}

impl SwapDirection {
    /// Order a reserve pair as (reserve_in, reserve_out)
    pub fn orient(&self, reserve_a: u128, reserve_b: u128) -> (u128, u128) {
        match self {
            SwapDirection::AToB => (reserve_a, reserve_b),
            SwapDirection::BToA => (reserve_b, reserve_a),
        }
    }
}

/// Offset pool configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug)]
pub struct OffsetPoolConfig {
    pub token_a: Address,
    pub token_b: Address,
    pub clock: EpochClock,
    pub offsets: EpochOffsets,
    /// Largest `amount_in` a single swap accepts
    pub max_swap_input: u128,
}

/// Offset pool state - stored in Instance storage
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OffsetPoolState {
    /// Last epoch the pool observed
    pub current_epoch: u64,
}

/// Snapshot pool configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug)]
pub struct SnapshotPoolConfig {
    pub token_a: Address,
    pub token_b: Address,
    pub clock: EpochClock,
    /// Withdrawal payout multiplier over DECAY_DENOMINATOR
    pub decay_numerator: u128,
}

/// Snapshot pool state: the single live reserve pair
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SnapshotPoolState {
    pub reserve_a: u128,
    pub reserve_b: u128,
    /// Last epoch the pool observed
    pub current_epoch: u64,
}
