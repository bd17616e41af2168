#![no_std]

//! Pool share ledger: per-holder share balances plus the global supply.
//!
//! Shared by both pool contracts. Entries live in the calling contract's
//! storage under their own key space, so they never collide with a pool's
//! own `DataKey`s. Balances that fall to zero stay in storage as zero.

use epoch_types::PoolError;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
pub enum ShareKey {
    /// holder -> share balance (Persistent storage)
    Balance(Address),
    /// Sum of all balances (Instance storage)
    TotalSupply,
}

const PERSISTENT_TTL_THRESHOLD: u32 = 17280; // ~1 day
const PERSISTENT_TTL_EXTEND: u32 = 518400; // ~30 days

pub fn balance(env: &Env, holder: &Address) -> u128 {
    let key = ShareKey::Balance(holder.clone());
    let storage = env.storage().persistent();
    match storage.get(&key) {
        Some(balance) => {
            storage.extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
            balance
        }
        None => 0,
    }
}

pub fn total_supply(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&ShareKey::TotalSupply)
        .unwrap_or(0)
}

fn set_balance(env: &Env, holder: &Address, amount: u128) {
    let key = ShareKey::Balance(holder.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

fn set_total_supply(env: &Env, amount: u128) {
    env.storage().instance().set(&ShareKey::TotalSupply, &amount);
}

/// Credit `amount` new shares to `to`
pub fn mint(env: &Env, to: &Address, amount: u128) -> Result<(), PoolError> {
    let new_balance = balance(env, to)
        .checked_add(amount)
        .ok_or(PoolError::ArithmeticOverflow)?;
    let new_supply = total_supply(env)
        .checked_add(amount)
        .ok_or(PoolError::ArithmeticOverflow)?;

    set_balance(env, to, new_balance);
    set_total_supply(env, new_supply);
    Ok(())
}

/// Destroy `amount` shares held by `from`
pub fn burn(env: &Env, from: &Address, amount: u128) -> Result<(), PoolError> {
    let new_balance = balance(env, from)
        .checked_sub(amount)
        .ok_or(PoolError::InsufficientBalance)?;
    // Supply is the sum of balances, so it cannot underflow when the balance did not
    let new_supply = total_supply(env)
        .checked_sub(amount)
        .ok_or(PoolError::InsufficientBalance)?;

    set_balance(env, from, new_balance);
    set_total_supply(env, new_supply);
    Ok(())
}

/// Fail with InsufficientBalance unless `holder` owns at least `amount`
pub fn require_balance(env: &Env, holder: &Address, amount: u128) -> Result<(), PoolError> {
    if balance(env, holder) < amount {
        return Err(PoolError::InsufficientBalance);
    }
    Ok(())
}
