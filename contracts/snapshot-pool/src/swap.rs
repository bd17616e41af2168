use crate::epoch::sync_epoch;
use crate::storage::{get_config, get_snapshot, get_state, set_state};
use crate::transfer::{pool_balance, transfer};
use epoch_math::{fee_adjusted_k_holds, implied_amount_in, k_from_reserves, k_from_snapshot};
use epoch_types::{PoolError, SnapshotPoolState};
use soroban_sdk::{log, Address, Env, Symbol, U256};

/// Invariant threshold for swaps in the state's current epoch.
///
/// The previous epoch's snapshot squared, or the live K when there is no
/// previous epoch or its snapshot is zero.
pub fn required_k(env: &Env, state: &SnapshotPoolState) -> U256 {
    if state.current_epoch > 0 {
        let liquidity = get_snapshot(env, state.current_epoch - 1);
        if liquidity > 0 {
            return k_from_snapshot(env, liquidity);
        }
    }
    k_from_reserves(env, state.reserve_a, state.reserve_b)
}

/// Optimistic swap.
///
/// The caller sends input to the pool earlier in the same transaction.
/// Outputs are paid first, the inputs are read back from the pool's
/// balances and the fee-adjusted product must clear `required_k`.
pub fn execute_swap(
    env: &Env,
    to: &Address,
    amount_a_out: u128,
    amount_b_out: u128,
) -> Result<(u128, u128), PoolError> {
    if amount_a_out == 0 && amount_b_out == 0 {
        return Err(PoolError::ZeroAmount);
    }

    let config = get_config(env)?;
    let mut state = get_state(env)?;
    sync_epoch(env, &config, &mut state)?;

    if amount_a_out >= state.reserve_a || amount_b_out >= state.reserve_b {
        return Err(PoolError::InsufficientReserves);
    }

    let k_required = required_k(env, &state);

    // Pay out before looking at what came in
    let pool = env.current_contract_address();
    transfer(env, &config.token_a, &pool, to, amount_a_out)?;
    transfer(env, &config.token_b, &pool, to, amount_b_out)?;

    let balance_a = pool_balance(env, &config.token_a)?;
    let balance_b = pool_balance(env, &config.token_b)?;

    let amount_a_in = implied_amount_in(balance_a, state.reserve_a, amount_a_out);
    let amount_b_in = implied_amount_in(balance_b, state.reserve_b, amount_b_out);
    if amount_a_in == 0 && amount_b_in == 0 {
        return Err(PoolError::InsufficientInput);
    }

    if !fee_adjusted_k_holds(env, balance_a, balance_b, amount_a_in, amount_b_in, &k_required)? {
        log!(env, "k check failed", balance_a, balance_b, amount_a_in, amount_b_in);
        return Err(PoolError::InvariantViolation);
    }

    state.reserve_a = balance_a;
    state.reserve_b = balance_b;
    set_state(env, &state);

    env.events().publish(
        (Symbol::new(env, "swap"), to.clone()),
        (state.current_epoch, amount_a_in, amount_b_in, amount_a_out, amount_b_out),
    );

    Ok((amount_a_in, amount_b_in))
}
