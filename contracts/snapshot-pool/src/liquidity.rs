use crate::epoch::sync_epoch;
use crate::storage::{get_config, get_state, set_state};
use crate::transfer::transfer;
use epoch_math::{amounts_for_shares, apply_decay, optimal_deposit, shares_for_deposit};
use epoch_types::PoolError;
use soroban_sdk::{Address, Env, Symbol};

/// Deposit into the live reserves and mint shares against the global supply
pub fn add_liquidity(
    env: &Env,
    provider: &Address,
    amount_a: u128,
    amount_b: u128,
) -> Result<u128, PoolError> {
    if amount_a == 0 || amount_b == 0 {
        return Err(PoolError::ZeroAmount);
    }

    let config = get_config(env)?;
    let mut state = get_state(env)?;
    sync_epoch(env, &config, &mut state)?;

    let (deposit_a, deposit_b) =
        optimal_deposit(env, amount_a, amount_b, state.reserve_a, state.reserve_b)?;
    let shares = shares_for_deposit(
        env,
        deposit_a,
        deposit_b,
        state.reserve_a,
        state.reserve_b,
        pool_shares::total_supply(env),
    )?;

    state.reserve_a = state
        .reserve_a
        .checked_add(deposit_a)
        .ok_or(PoolError::ArithmeticOverflow)?;
    state.reserve_b = state
        .reserve_b
        .checked_add(deposit_b)
        .ok_or(PoolError::ArithmeticOverflow)?;
    set_state(env, &state);

    let pool = env.current_contract_address();
    transfer(env, &config.token_a, provider, &pool, deposit_a)?;
    transfer(env, &config.token_b, provider, &pool, deposit_b)?;
    pool_shares::mint(env, provider, shares)?;

    env.events().publish(
        (Symbol::new(env, "deposit"), provider.clone()),
        (state.current_epoch, deposit_a, deposit_b, shares),
    );

    Ok(shares)
}

/// Redeem shares pro rata from the live reserves, less the decay haircut.
/// The haircut stays in the pool.
pub fn remove_liquidity(
    env: &Env,
    provider: &Address,
    shares: u128,
) -> Result<(u128, u128), PoolError> {
    if shares == 0 {
        return Err(PoolError::ZeroAmount);
    }
    pool_shares::require_balance(env, provider, shares)?;

    let config = get_config(env)?;
    let mut state = get_state(env)?;
    sync_epoch(env, &config, &mut state)?;

    let (gross_a, gross_b) = amounts_for_shares(
        env,
        shares,
        state.reserve_a,
        state.reserve_b,
        pool_shares::total_supply(env),
    )?;
    let amount_a = apply_decay(env, gross_a, config.decay_numerator)?;
    let amount_b = apply_decay(env, gross_b, config.decay_numerator)?;
    if amount_a == 0 || amount_b == 0 {
        return Err(PoolError::ZeroLiquidityComputed);
    }

    state.reserve_a = state
        .reserve_a
        .checked_sub(amount_a)
        .ok_or(PoolError::InsufficientReserves)?;
    state.reserve_b = state
        .reserve_b
        .checked_sub(amount_b)
        .ok_or(PoolError::InsufficientReserves)?;
    set_state(env, &state);

    pool_shares::burn(env, provider, shares)?;

    let pool = env.current_contract_address();
    transfer(env, &config.token_a, &pool, provider, amount_a)?;
    transfer(env, &config.token_b, &pool, provider, amount_b)?;

    env.events().publish(
        (Symbol::new(env, "withdraw"), provider.clone()),
        (state.current_epoch, amount_a, amount_b, shares),
    );

    Ok((amount_a, amount_b))
}
