use crate::epoch::sync_epoch;
use crate::storage::{get_config, get_epoch_entry, get_state, set_epoch_entry};
use crate::transfer::transfer;
use epoch_math::offset_amount_out;
use epoch_types::{EpochEntry, OffsetOperation, PoolError, SwapDirection};
use soroban_sdk::{Address, Env, Symbol};

/// Execute an exact-input swap.
///
/// The output is priced from the swap-pricing slot while the trade itself
/// is booked into the swap-settlement slot. With desynchronized offsets the
/// price therefore lags one epoch behind the reserves it drains.
pub fn execute_swap(
    env: &Env,
    trader: &Address,
    direction: SwapDirection,
    amount_in: u128,
) -> Result<u128, PoolError> {
    if amount_in == 0 {
        return Err(PoolError::ZeroAmount);
    }

    let config = get_config(env)?;
    if amount_in > config.max_swap_input {
        return Err(PoolError::SwapInputTooLarge);
    }

    let mut state = get_state(env)?;
    sync_epoch(env, &config, &mut state)?;

    let pricing_epoch = config
        .offsets
        .resolve(OffsetOperation::SwapPricing, state.current_epoch)?;
    let settlement_epoch = config
        .offsets
        .resolve(OffsetOperation::SwapSettlement, state.current_epoch)?;

    let pricing = get_epoch_entry(env, pricing_epoch);
    let (reserve_in, reserve_out) = direction.orient(pricing.reserve_a, pricing.reserve_b);
    let amount_out = offset_amount_out(env, amount_in, reserve_in, reserve_out)?;

    let mut settlement = get_epoch_entry(env, settlement_epoch);
    settle(&mut settlement, direction, amount_in, amount_out)?;
    set_epoch_entry(env, settlement_epoch, &settlement);

    let (token_in, token_out) = match direction {
        SwapDirection::AToB => (&config.token_a, &config.token_b),
        SwapDirection::BToA => (&config.token_b, &config.token_a),
    };
    let pool = env.current_contract_address();
    transfer(env, token_in, trader, &pool, amount_in)?;
    transfer(env, token_out, &pool, trader, amount_out)?;

    env.events().publish(
        (Symbol::new(env, "swap"), trader.clone()),
        (pricing_epoch, settlement_epoch, amount_in, amount_out),
    );

    Ok(amount_out)
}

/// Book a trade into a slot: input side grows, output side shrinks
fn settle(
    entry: &mut EpochEntry,
    direction: SwapDirection,
    amount_in: u128,
    amount_out: u128,
) -> Result<(), PoolError> {
    let (reserve_in, reserve_out) = match direction {
        SwapDirection::AToB => (&mut entry.reserve_a, &mut entry.reserve_b),
        SwapDirection::BToA => (&mut entry.reserve_b, &mut entry.reserve_a),
    };

    *reserve_out = reserve_out
        .checked_sub(amount_out)
        .ok_or(PoolError::InsufficientReserves)?;
    *reserve_in = reserve_in
        .checked_add(amount_in)
        .ok_or(PoolError::ArithmeticOverflow)?;
    Ok(())
}
