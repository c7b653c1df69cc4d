use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One income bracket of a marginal-rate slab table.
///
/// Slabs are ordered by `lower_bound` ascending and contiguous; the last
/// slab carries `upper_bound: None` and is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxSlab {
    /// The FY 2024-25 new-regime slab table for individual residents.
    ///
    /// | Income (INR)          | Rate |
    /// |-----------------------|------|
    /// | 0 – 3,00,000          | 0%   |
    /// | 3,00,000 – 6,00,000   | 5%   |
    /// | 6,00,000 – 9,00,000   | 10%  |
    /// | 9,00,000 – 12,00,000  | 15%  |
    /// | 12,00,000 – 15,00,000 | 20%  |
    /// | above 15,00,000       | 30%  |
    pub fn fy_2024_25() -> Vec<TaxSlab> {
        vec![
            TaxSlab {
                lower_bound: Decimal::ZERO,
                upper_bound: Some(Decimal::from(300_000)),
                rate: Decimal::ZERO,
            },
            TaxSlab {
                lower_bound: Decimal::from(300_000),
                upper_bound: Some(Decimal::from(600_000)),
                rate: Decimal::new(5, 2),
            },
            TaxSlab {
                lower_bound: Decimal::from(600_000),
                upper_bound: Some(Decimal::from(900_000)),
                rate: Decimal::new(10, 2),
            },
            TaxSlab {
                lower_bound: Decimal::from(900_000),
                upper_bound: Some(Decimal::from(1_200_000)),
                rate: Decimal::new(15, 2),
            },
            TaxSlab {
                lower_bound: Decimal::from(1_200_000),
                upper_bound: Some(Decimal::from(1_500_000)),
                rate: Decimal::new(20, 2),
            },
            TaxSlab {
                lower_bound: Decimal::from(1_500_000),
                upper_bound: None,
                rate: Decimal::new(30, 2),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn fy_2024_25_slabs_are_contiguous() {
        let slabs = TaxSlab::fy_2024_25();

        for pair in slabs.windows(2) {
            assert_eq!(pair[0].upper_bound, Some(pair[1].lower_bound));
        }
    }

    #[test]
    fn fy_2024_25_last_slab_is_unbounded() {
        let slabs = TaxSlab::fy_2024_25();

        let last = slabs.last().unwrap();

        assert_eq!(last.upper_bound, None);
        assert_eq!(last.rate, dec!(0.30));
    }

    #[test]
    fn fy_2024_25_first_slab_is_zero_rated() {
        let slabs = TaxSlab::fy_2024_25();

        assert_eq!(slabs[0].lower_bound, dec!(0));
        assert_eq!(slabs[0].rate, dec!(0));
    }
}
