use crate::epoch::sync_epoch;
use crate::invariants::{redemption_bounded, slot_backed};
use crate::storage::{get_config, get_epoch_entry, get_state, set_epoch_entry};
use crate::transfer::transfer;
use epoch_math::{amounts_for_shares, optimal_deposit, shares_for_deposit};
use epoch_types::{OffsetOperation, PoolError};
use soroban_sdk::{Address, Env, Symbol};

/// Deposit both tokens into the mint epoch's slot and mint pool shares
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

    let mint_epoch = config
        .offsets
        .resolve(OffsetOperation::Mint, state.current_epoch)?;
    let mut entry = get_epoch_entry(env, mint_epoch);

    let (deposit_a, deposit_b) =
        optimal_deposit(env, amount_a, amount_b, entry.reserve_a, entry.reserve_b)?;
    let shares = shares_for_deposit(
        env,
        deposit_a,
        deposit_b,
        entry.reserve_a,
        entry.reserve_b,
        entry.total_shares,
    )?;

    entry.reserve_a = entry
        .reserve_a
        .checked_add(deposit_a)
        .ok_or(PoolError::ArithmeticOverflow)?;
    entry.reserve_b = entry
        .reserve_b
        .checked_add(deposit_b)
        .ok_or(PoolError::ArithmeticOverflow)?;
    entry.total_shares = entry
        .total_shares
        .checked_add(shares)
        .ok_or(PoolError::ArithmeticOverflow)?;
    debug_assert!(slot_backed(&entry));
    set_epoch_entry(env, mint_epoch, &entry);

    // Pull tokens from the provider
    let pool = env.current_contract_address();
    transfer(env, &config.token_a, provider, &pool, deposit_a)?;
    transfer(env, &config.token_b, provider, &pool, deposit_b)?;

    pool_shares::mint(env, provider, shares)?;

    env.events().publish(
        (Symbol::new(env, "deposit"), provider.clone()),
        (mint_epoch, deposit_a, deposit_b, shares),
    );

    Ok(shares)
}

/// Burn pool shares against the burn epoch's slot and pay out both tokens
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

    let burn_epoch = config
        .offsets
        .resolve(OffsetOperation::Burn, state.current_epoch)?;
    let mut entry = get_epoch_entry(env, burn_epoch);

    let (amount_a, amount_b) = amounts_for_shares(
        env,
        shares,
        entry.reserve_a,
        entry.reserve_b,
        entry.total_shares,
    )?;
    debug_assert!(redemption_bounded(&entry, amount_a, amount_b));

    entry.reserve_a = entry
        .reserve_a
        .checked_sub(amount_a)
        .ok_or(PoolError::InsufficientReserves)?;
    entry.reserve_b = entry
        .reserve_b
        .checked_sub(amount_b)
        .ok_or(PoolError::InsufficientReserves)?;
    entry.total_shares = entry
        .total_shares
        .checked_sub(shares)
        .ok_or(PoolError::InsufficientReserves)?;
    set_epoch_entry(env, burn_epoch, &entry);

    pool_shares::burn(env, provider, shares)?;

    // Pay out to the provider
    let pool = env.current_contract_address();
    transfer(env, &config.token_a, &pool, provider, amount_a)?;
    transfer(env, &config.token_b, &pool, provider, amount_b)?;

    env.events().publish(
        (Symbol::new(env, "withdraw"), provider.clone()),
        (burn_epoch, amount_a, amount_b, shares),
    );

    Ok((amount_a, amount_b))
}
