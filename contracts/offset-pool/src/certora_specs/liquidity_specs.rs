// ============================================================================
// SLOT ACCOUNTING SPECIFICATIONS
// ============================================================================
//
// These rules call the contract entry points and compare slot contents
// before and after.
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use epoch_types::{EpochOffsets, SwapDirection};

#[cfg(feature = "certora")]
use crate::OffsetPool;

/// RULE: A successful deposit grows the mint slot and the share supply together
#[cfg(feature = "certora")]
#[rule]
pub fn deposit_grows_mint_slot(
    env: Env,
    seeder: Address,
    token_a: Address,
    token_b: Address,
    provider: Address,
    amount_a: u128,
    amount_b: u128,
) {
    cvlr_assume!(token_a != token_b);
    cvlr_assume!(amount_a > 0 && amount_b > 0);

    let init = OffsetPool::initialize(
        env.clone(),
        seeder,
        token_a,
        token_b,
        3_600,
        EpochOffsets::desynchronized(),
        0,
        0,
    );
    cvlr_assume!(init.is_ok());

    let before = OffsetPool::get_epoch(env.clone(), 0);
    let supply_before = OffsetPool::total_shares(env.clone());

    if let Ok(shares) = OffsetPool::add_liquidity(env.clone(), provider, amount_a, amount_b) {
        let after = OffsetPool::get_epoch(env.clone(), 0);
        cvlr_assert!(after.total_shares == before.total_shares + shares);
        cvlr_assert!(after.reserve_a > before.reserve_a);
        cvlr_assert!(after.reserve_b > before.reserve_b);
        cvlr_assert!(OffsetPool::total_shares(env.clone()) == supply_before + shares);
    }
}

/// RULE: A withdrawal never pays more than its burn slot holds
#[cfg(feature = "certora")]
#[rule]
pub fn withdrawal_bounded_by_slot(env: Env, provider: Address, shares: u128) {
    let before = OffsetPool::get_epoch(env.clone(), 0);
    cvlr_assume!(OffsetPool::current_epoch(env.clone()) == Ok(0));
    cvlr_assume!(OffsetPool::get_config(env.clone()).map(|c| c.offsets) == Ok(EpochOffsets::aligned()));

    if let Ok((amount_a, amount_b)) = OffsetPool::remove_liquidity(env.clone(), provider, shares) {
        cvlr_assert!(crate::invariants::redemption_bounded(&before, amount_a, amount_b));
    }
}

/// RULE: Swaps leave slot shares untouched
#[cfg(feature = "certora")]
#[rule]
pub fn swap_preserves_slot_shares(env: Env, trader: Address, amount_in: u128) {
    cvlr_assume!(OffsetPool::current_epoch(env.clone()) == Ok(0));
    let before = OffsetPool::get_epoch(env.clone(), 0);

    if OffsetPool::swap(env.clone(), trader, SwapDirection::AToB, amount_in).is_ok() {
        let after = OffsetPool::get_epoch(env.clone(), 0);
        cvlr_assert!(after.total_shares == before.total_shares);
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::invariants::{redemption_bounded, slot_backed};
    use epoch_math::{amounts_for_shares, shares_for_deposit};
    use epoch_types::EpochEntry;
    use soroban_sdk::Env;

    #[test]
    fn test_proportional_redemption_bounded() {
        let env = Env::default();
        let entry = EpochEntry::new(12_345, 678, 2_000);
        for shares in [1u128, 7, 999, 2_000] {
            if let Ok((a, b)) =
                amounts_for_shares(&env, shares, entry.reserve_a, entry.reserve_b, entry.total_shares)
            {
                assert!(redemption_bounded(&entry, a, b));
            }
        }
    }

    #[test]
    fn test_deposit_keeps_slot_backed() {
        let env = Env::default();
        let mut entry = EpochEntry::new(10_000, 40_000, 20_000);
        let shares = shares_for_deposit(&env, 500, 2_000, 10_000, 40_000, 20_000).unwrap();
        entry.reserve_a += 500;
        entry.reserve_b += 2_000;
        entry.total_shares += shares;
        assert_eq!(shares, 1_000);
        assert!(slot_backed(&entry));
    }
}
