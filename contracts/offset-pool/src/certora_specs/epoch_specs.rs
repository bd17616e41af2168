// ============================================================================
// EPOCH SPECIFICATIONS
// ============================================================================
//
// KEY PROPERTIES:
// 1. The clock-derived epoch never decreases as time moves forward
// 2. Negative offsets never resolve below epoch 0
// 3. Under desynchronized offsets, pricing never reads ahead of settlement
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use epoch_types::{EpochClock, EpochOffsets, OffsetOperation};

/// RULE: Sanity - a non-zero epoch is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_epoch_reachable(now: u64, start: u64, duration: u64) {
    cvlr_assume!(duration > 0);
    let clock = EpochClock {
        epoch_start: start,
        epoch_duration: duration,
    };
    if let Ok(epoch) = epoch_math::epoch_at(now, &clock) {
        cvlr_satisfy!(epoch > 0);
    }
}

/// RULE: Epoch derived from the clock is monotonic in time
#[cfg(feature = "certora")]
#[rule]
pub fn epoch_at_monotonic(t1: u64, t2: u64, start: u64, duration: u64) {
    cvlr_assume!(duration > 0);
    cvlr_assume!(t1 <= t2);
    let clock = EpochClock {
        epoch_start: start,
        epoch_duration: duration,
    };
    if let (Ok(e1), Ok(e2)) = (
        epoch_math::epoch_at(t1, &clock),
        epoch_math::epoch_at(t2, &clock),
    ) {
        cvlr_assert!(e1 <= e2);
    }
}

/// RULE: Pricing resolves at or behind settlement
#[cfg(feature = "certora")]
#[rule]
pub fn pricing_lags_settlement(current: u64) {
    cvlr_assume!(current < u64::MAX);
    let offsets = EpochOffsets::desynchronized();
    cvlr_assert!(crate::invariants::pricing_not_ahead_of_settlement(
        &offsets, current
    ));
}

/// RULE: Negative offsets saturate at epoch 0
#[cfg(feature = "certora")]
#[rule]
pub fn negative_offset_saturates(offset: i32) {
    cvlr_assume!(offset < 0);
    let offsets = EpochOffsets {
        swap_pricing: offset,
        ..EpochOffsets::aligned()
    };
    let resolved = offsets.resolve(OffsetOperation::SwapPricing, 0);
    cvlr_assert!(resolved == Ok(0));
}

// ============================================================================
// UNIT TESTS
// ============================================================================
