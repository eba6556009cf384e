use soroban_sdk::contracttype;

/// Numerator/denominator pair used for oracle prices and fee fractions.
///
/// Arithmetic on ratios lives in `pool-math` (it needs `Env` for 256-bit
/// intermediates); this type only carries the pair and its validity rules.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ratio {
    pub num: u128,
    pub denom: u128,
}

impl Ratio {
    pub fn new(num: u128, denom: u128) -> Self {
        Self { num, denom }
    }

    /// A ratio is usable at all only with a non-zero denominator.
    pub fn is_valid(&self) -> bool {
        self.denom != 0
    }

    /// Fee and reward ratios must not exceed one.
    pub fn is_fraction(&self) -> bool {
        self.is_valid() && self.num <= self.denom
    }

    /// Prices must additionally be non-zero, otherwise normalized funds
    /// collapse to zero and the invariant solver has nothing to work with.
    pub fn is_price(&self) -> bool {
        self.is_valid() && self.num != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_denominator_invalid() {
        assert!(!Ratio::new(1, 0).is_valid());
        assert!(!Ratio::new(0, 0).is_fraction());
        assert!(!Ratio::new(3, 0).is_price());
    }

    #[test]
    fn test_fraction_bounds() {
        assert!(Ratio::new(0, 1).is_fraction());
        assert!(Ratio::new(1, 1000).is_fraction());
        assert!(Ratio::new(1000, 1000).is_fraction());
        assert!(!Ratio::new(1001, 1000).is_fraction());
    }

    #[test]
    fn test_price_requires_nonzero_numerator() {
        assert!(Ratio::new(2, 1).is_price());
        assert!(!Ratio::new(0, 1).is_price());
    }
}
