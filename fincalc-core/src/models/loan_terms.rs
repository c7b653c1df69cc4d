use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the loan calculators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoanError {
    /// The loan terms violate a domain constraint. Detected before any
    /// computation proceeds; a partial result is never produced.
    #[error(
        "invalid loan parameters: principal {principal}, annual rate {annual_rate_percent}%, tenure {tenure_months} months"
    )]
    InvalidLoanParameters {
        principal: Decimal,
        annual_rate_percent: Decimal,
        tenure_months: u32,
    },

    /// A requested amortization row index is outside `[1, tenure_months]`.
    #[error("month must be between 1 and {tenure_months}, got {month}")]
    InvalidMonthParameter { month: u32, tenure_months: u32 },

    /// The tenure pushes the compound factor or the schedule dates past the
    /// supported numeric range.
    #[error("tenure of {tenure_months} months exceeds the supported numeric range")]
    TenureOutOfRange { tenure_months: u32 },
}

/// The immutable terms of a reducing-balance loan.
///
/// The engine holds no persisted identity for a loan; callers fetch these
/// values from storage and hand them in per call.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use fincalc_core::LoanTerms;
///
/// let terms = LoanTerms {
///     principal: dec!(500000.00),
///     annual_rate_percent: dec!(10.0),
///     tenure_months: 12,
///     start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
/// };
///
/// assert!(terms.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed, in whole currency units and paise.
    pub principal: Decimal,

    /// Annual interest rate as a percentage (e.g. `10.5` for 10.5% p.a.).
    pub annual_rate_percent: Decimal,

    /// Repayment period in months. Must be at least one.
    pub tenure_months: u32,

    /// Date of the first installment. Schedule rows and the loan end date
    /// are anchored here.
    pub start_date: NaiveDate,
}

impl LoanTerms {
    /// Validates the domain constraints on the terms.
    ///
    /// # Errors
    ///
    /// Returns [`LoanError::InvalidLoanParameters`] if the principal is not
    /// positive, the rate is negative, or the tenure is zero.
    pub fn validate(&self) -> Result<(), LoanError> {
        if self.principal <= Decimal::ZERO
            || self.annual_rate_percent < Decimal::ZERO
            || self.tenure_months == 0
        {
            return Err(LoanError::InvalidLoanParameters {
                principal: self.principal,
                annual_rate_percent: self.annual_rate_percent,
                tenure_months: self.tenure_months,
            });
        }
        Ok(())
    }

    /// The monthly interest rate as a fraction: `annual_rate_percent / 12 / 100`.
    pub fn monthly_rate(&self) -> Decimal {
        self.annual_rate_percent / Decimal::from(12) / Decimal::ONE_HUNDRED
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn terms() -> LoanTerms {
        LoanTerms {
            principal: dec!(500000.00),
            annual_rate_percent: dec!(10.0),
            tenure_months: 12,
            start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        }
    }

    #[test]
    fn validate_accepts_well_formed_terms() {
        assert_eq!(terms().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_principal() {
        let mut t = terms();
        t.principal = dec!(0.00);

        let result = t.validate();

        assert_eq!(
            result,
            Err(LoanError::InvalidLoanParameters {
                principal: dec!(0.00),
                annual_rate_percent: dec!(10.0),
                tenure_months: 12,
            })
        );
    }

    #[test]
    fn validate_rejects_negative_principal() {
        let mut t = terms();
        t.principal = dec!(-1.00);

        assert!(t.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_rate() {
        let mut t = terms();
        t.annual_rate_percent = dec!(-0.01);

        assert!(t.validate().is_err());
    }

    #[test]
    fn validate_accepts_zero_rate() {
        let mut t = terms();
        t.annual_rate_percent = dec!(0.0);

        assert_eq!(t.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_tenure() {
        let mut t = terms();
        t.tenure_months = 0;

        assert!(t.validate().is_err());
    }

    #[test]
    fn monthly_rate_divides_by_twelve_hundred() {
        let mut t = terms();
        t.annual_rate_percent = dec!(12.0);

        assert_eq!(t.monthly_rate(), dec!(0.01));
    }
}
