//! Shared helpers for the financial calculators: monetary rounding and
//! calendar-month arithmetic.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Standard financial rounding: values at exactly 0.005 round away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use fincalc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to the whole rupee, half-up.
///
/// Used for the final tax liability, which carries no fractional rupees.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use fincalc_core::calculations::common::round_rupee;
///
/// assert_eq!(round_rupee(dec!(62400.49)), dec!(62400));
/// assert_eq!(round_rupee(dec!(62400.50)), dec!(62401));
/// ```
pub fn round_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Advances a date by `months` calendar months.
///
/// The day of month is clamped to the target month's length (Jan 31 plus one
/// month is Feb 28/29). Returns `None` if the result falls outside the range
/// `NaiveDate` can represent.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use fincalc_core::calculations::common::add_months;
///
/// let d = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
///
/// assert_eq!(add_months(d, 1), NaiveDate::from_ymd_opt(2024, 2, 29));
/// assert_eq!(add_months(d, 12), NaiveDate::from_ymd_opt(2025, 1, 31));
/// ```
pub fn add_months(
    date: NaiveDate,
    months: u32,
) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}
