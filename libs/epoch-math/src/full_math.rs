use epoch_types::PoolError;
use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator, or ArithmeticOverflow if the quotient
/// does not fit in u128
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, PoolError> {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let product = mul_u256(env, a, b);
    let result = product.div(&U256::from_u128(env, denominator));

    u128_from_u256(&result)
}

/// Full 256-bit product of two u128 values (cannot overflow)
pub fn mul_u256(env: &Env, a: u128, b: u128) -> U256 {
    U256::from_u128(env, a).mul(&U256::from_u128(env, b))
}

/// Largest representable U256
pub fn u256_max(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

/// 256-bit multiplication that fails instead of trapping the host on overflow
pub fn checked_mul_u256(env: &Env, a: &U256, b: &U256) -> Result<U256, PoolError> {
    let zero = U256::from_u32(env, 0);
    if *a == zero || *b == zero {
        return Ok(zero);
    }
    if *b > u256_max(env).div(a) {
        return Err(PoolError::ArithmeticOverflow);
    }
    Ok(a.mul(b))
}

/// Convert U256 to u128
pub fn u128_from_u256(value: &U256) -> Result<u128, PoolError> {
    value.to_u128().ok_or(PoolError::ArithmeticOverflow)
}

/// Token interface amounts are i128; pool accounting is u128
pub fn to_token_amount(amount: u128) -> Result<i128, PoolError> {
    i128::try_from(amount).map_err(|_| PoolError::ArithmeticOverflow)
}

/// Token balances are never negative for a well-behaved token
pub fn from_token_amount(amount: i128) -> Result<u128, PoolError> {
    u128::try_from(amount).map_err(|_| PoolError::ArithmeticOverflow)
}
