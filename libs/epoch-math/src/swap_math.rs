use crate::full_math::{checked_mul_u256, mul_div, mul_u256};
use epoch_types::{PoolError, FEE_DENOMINATOR, FEE_INPUT_PART, FEE_NUMERATOR, K_CHECK_SCALE};
use soroban_sdk::{Env, U256};

/// Offset-pool swap output.
///
/// Prices with the integer spot ratio floor(reserve_out / reserve_in),
/// then keeps 997/1000 of the result.
pub fn offset_amount_out(
    env: &Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, PoolError> {
    if reserve_in == 0 {
        return Err(PoolError::ZeroOutputComputed);
    }

    let price = reserve_out / reserve_in;
    let gross = price
        .checked_mul(amount_in)
        .ok_or(PoolError::ArithmeticOverflow)?;
    let amount_out = mul_div(env, gross, FEE_NUMERATOR, FEE_DENOMINATOR)?;

    if amount_out == 0 {
        return Err(PoolError::ZeroOutputComputed);
    }
    Ok(amount_out)
}

/// Input implied by a post-payout balance: whatever exceeds reserve - amount_out
pub fn implied_amount_in(balance: u128, reserve: u128, amount_out: u128) -> u128 {
    let remaining = reserve.saturating_sub(amount_out);
    balance.saturating_sub(remaining)
}

/// K reference recorded by a liquidity snapshot: L^2
pub fn k_from_snapshot(env: &Env, liquidity: u128) -> U256 {
    mul_u256(env, liquidity, liquidity)
}

/// K reference from a reserve pair: reserve_a * reserve_b
pub fn k_from_reserves(env: &Env, reserve_a: u128, reserve_b: u128) -> U256 {
    mul_u256(env, reserve_a, reserve_b)
}

/// Fee-adjusted constant-product check:
/// (balance_a*1000 - 3*amount_a_in) * (balance_b*1000 - 3*amount_b_in) >= k_required * 1_000_000
///
/// Each `amount_in` must not exceed its balance.
pub fn fee_adjusted_k_holds(
    env: &Env,
    balance_a: u128,
    balance_b: u128,
    amount_a_in: u128,
    amount_b_in: u128,
    k_required: &U256,
) -> Result<bool, PoolError> {
    if amount_a_in > balance_a || amount_b_in > balance_b {
        return Err(PoolError::ArithmeticOverflow);
    }

    let adjusted_a = mul_u256(env, balance_a, FEE_DENOMINATOR)
        .sub(&mul_u256(env, amount_a_in, FEE_INPUT_PART));
    let adjusted_b = mul_u256(env, balance_b, FEE_DENOMINATOR)
        .sub(&mul_u256(env, amount_b_in, FEE_INPUT_PART));

    let lhs = checked_mul_u256(env, &adjusted_a, &adjusted_b)?;
    let rhs = checked_mul_u256(env, k_required, &U256::from_u128(env, K_CHECK_SCALE))?;
    Ok(lhs >= rhs)
}
