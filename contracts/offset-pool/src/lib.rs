#![no_std]

mod epoch;
mod invariants;
mod liquidity;
mod storage;
mod swap;
mod transfer;

#[cfg(any(test, feature = "certora"))]
mod certora_specs;

use epoch_math::{epoch_at, sqrt_product};
use epoch_types::{
    EpochClock, EpochEntry, EpochOffsets, OffsetOperation, OffsetPoolConfig, OffsetPoolState,
    PoolError, SwapDirection, MAX_SWAP_INPUT,
};
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};
use storage::{
    get_config, get_epoch_entry, get_state, has_epoch_entry, is_initialized, set_config,
    set_epoch_entry, set_state,
};

/// Two-asset pool whose reserves are partitioned into per-epoch slots.
///
/// Each operation reads and writes the slot selected by its entry in the
/// pool's `EpochOffsets` table, relative to the current epoch.
#[contract]
pub struct OffsetPool;

#[contractimpl]
impl OffsetPool {
    /// Initialize a new pool
    ///
    /// # Arguments
    /// * `seeder` - Provides the bootstrap reserves and receives their shares
    /// * `epoch_duration` - Epoch length in seconds, counted from now
    /// * `offsets` - Epoch slot each operation uses
    /// * `bootstrap_a`, `bootstrap_b` - Epoch 0 reserves; both zero for an empty pool
    pub fn initialize(
        env: Env,
        seeder: Address,
        token_a: Address,
        token_b: Address,
        epoch_duration: u64,
        offsets: EpochOffsets,
        bootstrap_a: u128,
        bootstrap_b: u128,
    ) -> Result<(), PoolError> {
        if is_initialized(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        if token_a == token_b {
            return Err(PoolError::IdenticalTokens);
        }
        if epoch_duration == 0 {
            return Err(PoolError::InvalidEpochDuration);
        }
        if (bootstrap_a == 0) != (bootstrap_b == 0) {
            return Err(PoolError::ZeroAmount);
        }

        let config = OffsetPoolConfig {
            token_a,
            token_b,
            clock: EpochClock {
                epoch_start: env.ledger().timestamp(),
                epoch_duration,
            },
            offsets,
            max_swap_input: MAX_SWAP_INPUT,
        };
        set_config(&env, &config);
        set_state(&env, &OffsetPoolState::default());

        if bootstrap_a > 0 {
            seeder.require_auth();

            let shares = sqrt_product(&env, bootstrap_a, bootstrap_b)?;
            if shares == 0 {
                return Err(PoolError::ZeroLiquidityComputed);
            }
            set_epoch_entry(&env, 0, &EpochEntry::new(bootstrap_a, bootstrap_b, shares));

            let pool = env.current_contract_address();
            transfer::transfer(&env, &config.token_a, &seeder, &pool, bootstrap_a)?;
            transfer::transfer(&env, &config.token_b, &seeder, &pool, bootstrap_b)?;
            pool_shares::mint(&env, &seeder, shares)?;
        }

        env.events().publish(
            (Symbol::new(&env, "initialized"),),
            (config.token_a, config.token_b, epoch_duration, bootstrap_a, bootstrap_b),
        );
        Ok(())
    }

    /// Add liquidity against the mint epoch's slot
    ///
    /// # Returns
    /// Shares minted to `provider`
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        amount_a: u128,
        amount_b: u128,
    ) -> Result<u128, PoolError> {
        provider.require_auth();
        liquidity::add_liquidity(&env, &provider, amount_a, amount_b)
    }

    /// Redeem shares against the burn epoch's slot
    ///
    /// # Returns
    /// (amount_a, amount_b) - Token amounts paid out
    pub fn remove_liquidity(
        env: Env,
        provider: Address,
        shares: u128,
    ) -> Result<(u128, u128), PoolError> {
        provider.require_auth();
        liquidity::remove_liquidity(&env, &provider, shares)
    }

    /// Swap an exact input amount
    ///
    /// # Returns
    /// Amount of the output token paid to `trader`
    pub fn swap(
        env: Env,
        trader: Address,
        direction: SwapDirection,
        amount_in: u128,
    ) -> Result<u128, PoolError> {
        trader.require_auth();
        swap::execute_swap(&env, &trader, direction, amount_in)
    }

    /// Run the epoch check on its own
    ///
    /// # Returns
    /// The pool's current epoch after the check
    pub fn checkpoint(env: Env) -> Result<u64, PoolError> {
        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        epoch::sync_epoch(&env, &config, &mut state)?;
        Ok(state.current_epoch)
    }

    // === View Functions ===

    /// Last epoch the pool observed
    pub fn current_epoch(env: Env) -> Result<u64, PoolError> {
        Ok(get_state(&env)?.current_epoch)
    }

    /// Epoch derived from the ledger clock, which may be ahead of `current_epoch`
    pub fn clock_epoch(env: Env) -> Result<u64, PoolError> {
        let config = get_config(&env)?;
        epoch_at(env.ledger().timestamp(), &config.clock)
    }

    /// Slot of any epoch; empty if never written
    pub fn get_epoch(env: Env, epoch: u64) -> EpochEntry {
        get_epoch_entry(&env, epoch)
    }

    /// Whether a slot was ever written
    pub fn epoch_recorded(env: Env, epoch: u64) -> bool {
        has_epoch_entry(&env, epoch)
    }

    /// Reserves of the slot swaps settle into
    pub fn current_reserves(env: Env) -> Result<(u128, u128), PoolError> {
        let entry = Self::slot_for(&env, OffsetOperation::SwapSettlement)?;
        Ok((entry.reserve_a, entry.reserve_b))
    }

    /// Reserves of the slot swaps are priced from
    pub fn pricing_reserves(env: Env) -> Result<(u128, u128), PoolError> {
        let entry = Self::slot_for(&env, OffsetOperation::SwapPricing)?;
        Ok((entry.reserve_a, entry.reserve_b))
    }

    pub fn share_balance(env: Env, holder: Address) -> u128 {
        pool_shares::balance(&env, &holder)
    }

    pub fn total_shares(env: Env) -> u128 {
        pool_shares::total_supply(&env)
    }

    pub fn get_config(env: Env) -> Result<OffsetPoolConfig, PoolError> {
        get_config(&env)
    }

    pub fn get_state(env: Env) -> Result<OffsetPoolState, PoolError> {
        get_state(&env)
    }

    pub fn token_a(env: Env) -> Result<Address, PoolError> {
        Ok(get_config(&env)?.token_a)
    }

    pub fn token_b(env: Env) -> Result<Address, PoolError> {
        Ok(get_config(&env)?.token_b)
    }
}

impl OffsetPool {
    fn slot_for(env: &Env, op: OffsetOperation) -> Result<EpochEntry, PoolError> {
        let config = get_config(env)?;
        let state = get_state(env)?;
        let epoch = config.offsets.resolve(op, state.current_epoch)?;
        Ok(get_epoch_entry(env, epoch))
    }
}
