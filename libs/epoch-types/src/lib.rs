#![no_std]

mod epoch;
mod error;
mod pool;

pub use epoch::*;
pub use error::*;
pub use pool::*;

/// Swap fee numerator: output is scaled by 997/1000 (0.3% fee)
pub const FEE_NUMERATOR: u128 = 997;

/// Shared denominator for the swap fee and the slippage guard
pub const FEE_DENOMINATOR: u128 = 1000;

/// Fee charged on the input side of the fee-adjusted K check, per FEE_DENOMINATOR
pub const FEE_INPUT_PART: u128 = 3;

/// A deposit's ratio-limited counterpart must be at least 99.5% of the offered amount
pub const SLIPPAGE_TOLERANCE_NUMERATOR: u128 = 995;

/// Withdrawal haircut applied by the snapshot pool: 9950/10000 (0.5%)
pub const DECAY_NUMERATOR: u128 = 9950;

/// Denominator for DECAY_NUMERATOR
pub const DECAY_DENOMINATOR: u128 = 10_000;

/// Hard per-call input cap for offset-pool swaps.
/// One whole unit of a 7-decimal Stellar asset.
pub const MAX_SWAP_INPUT: u128 = 10_000_000;

/// Scale of the fee-adjusted K check (FEE_DENOMINATOR squared)
pub const K_CHECK_SCALE: u128 = FEE_DENOMINATOR * FEE_DENOMINATOR;
