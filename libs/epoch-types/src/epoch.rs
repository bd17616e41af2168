use crate::PoolError;
use soroban_sdk::contracttype;

/// Fixed-length epoch schedule anchored at a reference timestamp
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EpochClock {
    /// Ledger timestamp at which epoch 0 begins
    pub epoch_start: u64,
    /// Epoch length in seconds, always > 0
    pub epoch_duration: u64,
}

/// Operations that read or write an epoch slot of the offset pool
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OffsetOperation {
    Mint,
    Burn,
    SwapPricing,
    SwapSettlement,
}

/// Per-operation epoch offsets, relative to the pool's current epoch.
///
/// Negative offsets saturate at epoch 0.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EpochOffsets {
    pub mint: i32,
    pub burn: i32,
    pub swap_pricing: i32,
    pub swap_settlement: i32,
}

impl EpochOffsets {
    /// Mint into `e`, burn from `e + 1`, price swaps from `e - 1`, settle into `e`
    pub fn desynchronized() -> Self {
        Self {
            mint: 0,
            burn: 1,
            swap_pricing: -1,
            swap_settlement: 0,
        }
    }

    /// Every operation reads and writes the current epoch
    pub fn aligned() -> Self {
        Self {
            mint: 0,
            burn: 0,
            swap_pricing: 0,
            swap_settlement: 0,
        }
    }

    pub fn offset_for(&self, op: OffsetOperation) -> i32 {
        match op {
            OffsetOperation::Mint => self.mint,
            OffsetOperation::Burn => self.burn,
            OffsetOperation::SwapPricing => self.swap_pricing,
            OffsetOperation::SwapSettlement => self.swap_settlement,
        }
    }

    /// Epoch slot an operation uses when the pool is in `current_epoch`
    pub fn resolve(&self, op: OffsetOperation, current_epoch: u64) -> Result<u64, PoolError> {
        let offset = self.offset_for(op);
        if offset < 0 {
            Ok(current_epoch.saturating_sub(offset.unsigned_abs() as u64))
        } else {
            current_epoch
                .checked_add(offset as u64)
                .ok_or(PoolError::ArithmeticOverflow)
        }
    }
}

/// A single epoch transition detected by the clock check
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EpochAdvance {
    /// Epoch the pool last observed
    pub from: u64,
    /// Epoch derived from the clock, strictly greater than `from`
    pub to: u64,
}

impl EpochAdvance {
    /// The epoch the carry-forward or snapshot step references.
    ///
    /// Always `to - 1`, even when several epochs were skipped.
    pub fn previous(&self) -> u64 {
        self.to - 1
    }

    pub fn skipped(&self) -> u64 {
        self.to - self.from - 1
    }
}
