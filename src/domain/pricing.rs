//! Volume discount tiers.

/// A discount applied once the subtotal reaches `threshold` (inclusive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountTier {
    pub threshold: f64,
    pub rate: f64,
}

/// Discount table, highest threshold first. The first tier reached wins.
pub const DISCOUNT_TIERS: [DiscountTier; 5] = [
    DiscountTier { threshold: 50_000.0, rate: 0.15 },
    DiscountTier { threshold: 10_000.0, rate: 0.10 },
    DiscountTier { threshold: 7_000.0, rate: 0.07 },
    DiscountTier { threshold: 5_000.0, rate: 0.05 },
    DiscountTier { threshold: 1_000.0, rate: 0.03 },
];

/// Tier reached by `subtotal`, or `None` below the lowest threshold.
///
/// NaN never reaches a tier.
pub fn matching_tier(subtotal: f64) -> Option<&'static DiscountTier> {
    DISCOUNT_TIERS.iter().find(|tier| subtotal >= tier.threshold)
}

/// Discount rate for `subtotal` (0 when no tier is reached).
pub fn discount_rate(subtotal: f64) -> f64 {
    matching_tier(subtotal).map_or(0.0, |tier| tier.rate)
}

/// Discount amount for `subtotal`, not the rate.
pub fn discount(subtotal: f64) -> f64 {
    match matching_tier(subtotal) {
        Some(tier) => subtotal * tier.rate,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(500.0, 0.0)]
    #[case(999.99, 0.0)]
    #[case(1_000.0, 0.03)]
    #[case(4_999.99, 0.03)]
    #[case(5_000.0, 0.05)]
    #[case(6_999.0, 0.05)]
    #[case(7_000.0, 0.07)]
    #[case(9_999.0, 0.07)]
    #[case(10_000.0, 0.10)]
    #[case(49_999.0, 0.10)]
    #[case(50_000.0, 0.15)]
    #[case(1_000_000.0, 0.15)]
    fn given_subtotal_when_looking_up_rate_then_returns_tier_rate(
        #[case] subtotal: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(discount_rate(subtotal), expected);
    }

    #[rstest]
    #[case(6_000.0, 300.0)]
    #[case(60_000.0, 9_000.0)]
    #[case(1_000.0, 30.0)]
    #[case(10_000.0, 1_000.0)]
    fn given_subtotal_in_tier_when_discounting_then_returns_amount(
        #[case] subtotal: f64,
        #[case] expected: f64,
    ) {
        assert!((discount(subtotal) - expected).abs() < 1e-9);
    }

    #[test]
    fn given_subtotal_below_lowest_tier_when_discounting_then_returns_zero() {
        assert_eq!(discount(500.0), 0.0);
        assert_eq!(discount(100.0), 0.0);
        assert_eq!(discount(0.0), 0.0);
    }

    #[test]
    fn given_nan_when_discounting_then_no_tier_matches() {
        assert!(matching_tier(f64::NAN).is_none());
        assert_eq!(discount(f64::NAN), 0.0);
    }

    #[test]
    fn tiers_are_ordered_highest_first() {
        assert!(DISCOUNT_TIERS
            .windows(2)
            .all(|pair| pair[0].threshold > pair[1].threshold));
    }
}
