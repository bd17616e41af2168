use crate::full_math::{mul_u256, u128_from_u256};
use epoch_types::PoolError;
use soroban_sdk::Env;

/// floor(sqrt(value)) by Newton's method
pub fn isqrt(value: u128) -> u128 {
    if value < 2 {
        return value;
    }

    // Start at a power of two that is >= sqrt(value)
    let bits = 128 - value.leading_zeros();
    let mut x = 1u128 << ((bits + 1) / 2);
    loop {
        let y = (x + value / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// floor(sqrt(a * b)) without requiring the product to fit in u128
pub fn sqrt_product(env: &Env, a: u128, b: u128) -> Result<u128, PoolError> {
    if let Some(product) = a.checked_mul(b) {
        return Ok(isqrt(product));
    }

    // max(a, b) >= sqrt(a * b), so Newton descends from there
    let product = mul_u256(env, a, b);
    let mut x = soroban_sdk::U256::from_u128(env, a.max(b));
    loop {
        let y = x.add(&product.div(&x)).shr(1);
        if y >= x {
            return u128_from_u256(&x);
        }
        x = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_isqrt_small_values() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(15), 3);
        assert_eq!(isqrt(16), 4);
    }

    #[test]
    fn test_isqrt_perfect_squares() {
        assert_eq!(isqrt(10_000 * 10_000), 10_000);
        assert_eq!(isqrt(60_000 * 60_000), 60_000);
    }

    #[test]
    fn test_isqrt_max() {
        assert_eq!(isqrt(u128::MAX), u64::MAX as u128);
    }

    #[test]
    fn test_sqrt_product_fits_u128() {
        let env = Env::default();
        assert_eq!(sqrt_product(&env, 10_000, 10_000), Ok(10_000));
        assert_eq!(sqrt_product(&env, 2, 8), Ok(4));
        assert_eq!(sqrt_product(&env, 0, 8), Ok(0));
    }

    #[test]
    fn test_sqrt_product_wide() {
        let env = Env::default();
        // sqrt(2^127 * 2^3) = 2^65
        assert_eq!(sqrt_product(&env, 1u128 << 127, 8), Ok(1u128 << 65));
        assert_eq!(sqrt_product(&env, u128::MAX, u128::MAX), Ok(u128::MAX));
    }

    #[test]
    fn test_sqrt_product_rounds_down() {
        let env = Env::default();
        // sqrt(3 * 2^127) is not an integer
        let a = 1u128 << 127;
        let root = sqrt_product(&env, a, 3).unwrap();
        let low = mul_u256(&env, root, root);
        let high = mul_u256(&env, root + 1, root + 1);
        let product = mul_u256(&env, a, 3);
        assert!(low <= product);
        assert!(high > product);
    }
}
