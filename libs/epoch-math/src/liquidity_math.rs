use crate::full_math::{mul_div, mul_u256};
use crate::sqrt_math::sqrt_product;
use epoch_types::{
    PoolError, DECAY_DENOMINATOR, FEE_DENOMINATOR, SLIPPAGE_TOLERANCE_NUMERATOR,
};
use soroban_sdk::Env;

/// Counter-asset amount that preserves the reserve ratio:
/// amount_a * reserve_b / reserve_a
pub fn quote(env: &Env, amount_a: u128, reserve_a: u128, reserve_b: u128) -> Result<u128, PoolError> {
    if reserve_a == 0 {
        return Err(PoolError::ZeroLiquidityComputed);
    }
    mul_div(env, amount_a, reserve_b, reserve_a)
}

/// Amounts actually deposited for an offer of (amount_a, amount_b).
///
/// An empty reserve takes the offer as-is. Otherwise the offer is cut down
/// to the reserve ratio, limited by whichever side is scarce. When token B
/// is the scarce side, the ratio-limited amount of A must stay within 0.5%
/// of the offered amount of A.
pub fn optimal_deposit(
    env: &Env,
    amount_a: u128,
    amount_b: u128,
    reserve_a: u128,
    reserve_b: u128,
) -> Result<(u128, u128), PoolError> {
    if reserve_a == 0 {
        return Ok((amount_a, amount_b));
    }

    let amount_b_optimal = quote(env, amount_a, reserve_a, reserve_b)?;
    if amount_b >= amount_b_optimal {
        return Ok((amount_a, amount_b_optimal));
    }

    let amount_a_optimal = quote(env, amount_b, reserve_b, reserve_a)?;
    let scaled_optimal = mul_u256(env, amount_a_optimal, FEE_DENOMINATOR);
    let scaled_floor = mul_u256(env, amount_a, SLIPPAGE_TOLERANCE_NUMERATOR);
    if scaled_optimal < scaled_floor {
        return Err(PoolError::InsufficientInput);
    }

    Ok((amount_a_optimal, amount_b))
}

/// Shares minted for a deposit against a (reserve_a, reserve_b, total_shares) view.
///
/// First deposit: floor(sqrt(amount_a * amount_b)).
/// Otherwise: min(amount_a * total / reserve_a, amount_b * total / reserve_b).
pub fn shares_for_deposit(
    env: &Env,
    amount_a: u128,
    amount_b: u128,
    reserve_a: u128,
    reserve_b: u128,
    total_shares: u128,
) -> Result<u128, PoolError> {
    let shares = if total_shares == 0 {
        sqrt_product(env, amount_a, amount_b)?
    } else {
        if reserve_a == 0 || reserve_b == 0 {
            return Err(PoolError::ZeroLiquidityComputed);
        }
        let by_a = mul_div(env, amount_a, total_shares, reserve_a)?;
        let by_b = mul_div(env, amount_b, total_shares, reserve_b)?;
        by_a.min(by_b)
    };

    if shares == 0 {
        return Err(PoolError::ZeroLiquidityComputed);
    }
    Ok(shares)
}

/// Pro-rata redemption: shares * reserve / total_shares for each side
pub fn amounts_for_shares(
    env: &Env,
    shares: u128,
    reserve_a: u128,
    reserve_b: u128,
    total_shares: u128,
) -> Result<(u128, u128), PoolError> {
    if total_shares == 0 {
        return Err(PoolError::ZeroLiquidityComputed);
    }

    let amount_a = mul_div(env, shares, reserve_a, total_shares)?;
    let amount_b = mul_div(env, shares, reserve_b, total_shares)?;
    if amount_a == 0 || amount_b == 0 {
        return Err(PoolError::ZeroLiquidityComputed);
    }
    Ok((amount_a, amount_b))
}

/// Withdrawal haircut: amount * decay_numerator / DECAY_DENOMINATOR
pub fn apply_decay(env: &Env, amount: u128, decay_numerator: u128) -> Result<u128, PoolError> {
    mul_div(env, amount, decay_numerator, DECAY_DENOMINATOR)
}
