use pool_types::Ratio;
use soroban_sdk::{Env, U256};

/// Floor of (a * b) / denominator, computed at 256-bit width so the
/// product never wraps.
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("Division by zero");
    }
    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    narrow(&product.div(&U256::from_u128(env, denominator)))
}

/// Rescale an asset amount to the common precision used by the invariant
/// solvers: amount * multiplier * price.num / price.denom, floored.
pub fn normalize(env: &Env, amount: u128, multiplier: u128, price: &Ratio) -> u128 {
    if price.denom == 0 {
        panic!("Division by zero");
    }
    let scaled = U256::from_u128(env, amount)
        .mul(&U256::from_u128(env, multiplier))
        .mul(&U256::from_u128(env, price.num));
    narrow(&scaled.div(&U256::from_u128(env, price.denom)))
}

/// Inverse of `normalize`: amount * price.denom / (multiplier * price.num),
/// floored. Flooring here always favors the pool over the trader.
pub fn denormalize(env: &Env, amount: u128, multiplier: u128, price: &Ratio) -> u128 {
    if multiplier == 0 || price.num == 0 {
        panic!("Division by zero");
    }
    let divisor = U256::from_u128(env, multiplier).mul(&U256::from_u128(env, price.num));
    let scaled = U256::from_u128(env, amount).mul(&U256::from_u128(env, price.denom));
    narrow(&scaled.div(&divisor))
}

fn narrow(value: &U256) -> u128 {
    match value.to_u128() {
        Some(v) => v,
        None => panic!("Amount overflow"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_mul_div_basic() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 6, 7, 3), 14);
        assert_eq!(mul_div(&env, 0, 7, 3), 0);
    }

    #[test]
    fn test_mul_div_floors() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 1, 1, 2), 0);
        assert_eq!(mul_div(&env, 7, 11, 13), 5); // 77 / 13 = 5.92...
    }

    #[test]
    fn test_mul_div_wide_intermediate() {
        let env = Env::default();
        // a * b overflows u128 but the quotient fits
        let big = 1u128 << 100;
        assert_eq!(mul_div(&env, big, big, big), big);
        assert_eq!(mul_div(&env, u128::MAX, u128::MAX, u128::MAX), u128::MAX);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_mul_div_zero_denominator() {
        let env = Env::default();
        mul_div(&env, 1, 2, 0);
    }

    #[test]
    #[should_panic(expected = "Amount overflow")]
    fn test_mul_div_result_too_wide() {
        let env = Env::default();
        mul_div(&env, u128::MAX, u128::MAX, 1);
    }

    #[test]
    fn test_normalize_applies_multiplier_and_price() {
        let env = Env::default();
        // 500 units at multiplier 100 and price 2/1 -> 100_000 common units
        assert_eq!(normalize(&env, 500, 100, &Ratio::new(2, 1)), 100_000);
        // price below one
        assert_eq!(normalize(&env, 10, 1, &Ratio::new(1, 3)), 3);
    }

    #[test]
    fn test_denormalize_inverts_normalize() {
        let env = Env::default();
        let price = Ratio::new(2, 1);
        let common = normalize(&env, 500, 100, &price);
        assert_eq!(denormalize(&env, common, 100, &price), 500);
    }

    #[test]
    fn test_denormalize_rounds_in_pool_favor() {
        let env = Env::default();
        let price = Ratio::new(1, 3);
        let common = normalize(&env, 10, 1, &price); // 3, truncated from 3.33
        assert!(denormalize(&env, common, 1, &price) <= 10);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_denormalize_zero_price() {
        let env = Env::default();
        denormalize(&env, 100, 1, &Ratio::new(0, 1));
    }
}
