#[cfg(test)]
mod tests {
    use crate::constants::{FULL_SHARE, PERCENT_SCALE};
    use crate::error::ProceedsDistributorError;
    use crate::test::assert_error;
    use crate::utils::scaled_amount;

    #[test]
    fn test_half_of_hundred() {
        assert_eq!(PERCENT_SCALE, 1_000_000);
        assert_eq!(scaled_amount(100, 50_000_000).unwrap(), 50);
    }

    #[test]
    fn test_negligible_share_floors_to_zero() {
        assert_eq!(scaled_amount(100, 1).unwrap(), 0);
        assert_eq!(scaled_amount(0, 50_000_000).unwrap(), 0);
    }

    #[test]
    fn test_full_share_returns_fund() {
        assert_eq!(scaled_amount(1_234_567, FULL_SHARE).unwrap(), 1_234_567);
        assert_eq!(scaled_amount(u64::MAX, FULL_SHARE).unwrap(), u64::MAX);
    }

    #[test]
    fn test_rounding_leaves_dust() {
        let fund = 1_000_003;
        let shares = [50_000_000, 25_000_000, 12_500_000, 12_500_000];
        let paid: Vec<u64> = shares
            .iter()
            .map(|share| scaled_amount(fund, *share).unwrap())
            .collect();

        assert_eq!(paid, vec![500_001, 250_000, 125_000, 125_000]);
        assert_eq!(fund - paid.iter().sum::<u64>(), 2);
    }

    #[test]
    fn test_fractional_percent() {
        // 0.5% of 1_000 tokens
        assert_eq!(scaled_amount(1_000, 500_000).unwrap(), 5);
        // 33.333333% of 3_000_000
        assert_eq!(scaled_amount(3_000_000, 33_333_333).unwrap(), 999_999);
    }

    #[test]
    fn test_share_above_hundred_percent_overflows_only_past_u64() {
        assert_eq!(scaled_amount(10, 2 * FULL_SHARE).unwrap(), 20);
        assert_error(
            scaled_amount(u64::MAX, 2 * FULL_SHARE),
            ProceedsDistributorError::ArithmeticOverflow,
        );
    }
}
