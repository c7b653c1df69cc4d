//! Equated Monthly Installment calculations for reducing-balance loans.
//!
//! The standard EMI formula is
//!
//! ```text
//! EMI = P * r * (1 + r)^n / ((1 + r)^n - 1)
//! ```
//!
//! where `P` is the principal, `r` the monthly rate (`annual % / 12 / 100`)
//! and `n` the tenure in months. A zero rate degenerates to straight
//! division of the principal over the tenure, which also avoids the division
//! by zero in the formula.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use fincalc_core::LoanTerms;
//! use fincalc_core::calculations::EmiCalculator;
//!
//! let terms = LoanTerms {
//!     principal: dec!(100000.00),
//!     annual_rate_percent: dec!(12.0),
//!     tenure_months: 12,
//!     start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
//! };
//!
//! let result = EmiCalculator::new(&terms).calculate().unwrap();
//!
//! assert_eq!(result.monthly_emi, dec!(8884.88));
//! assert_eq!(result.total_payable, dec!(106618.55));
//! assert_eq!(result.total_interest, dec!(6618.55));
//! assert_eq!(result.end_date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
//! ```

use rust_decimal::{Decimal, MathematicalOps};

use crate::calculations::common::{add_months, round_half_up};
use crate::models::{EmiResult, LoanError, LoanTerms};

/// Calculator for the headline loan figures: monthly EMI, totals and the
/// loan end date.
#[derive(Debug, Clone)]
pub struct EmiCalculator<'a> {
    terms: &'a LoanTerms,
}

impl<'a> EmiCalculator<'a> {
    /// Creates a calculator over the given loan terms.
    pub fn new(terms: &'a LoanTerms) -> Self {
        Self { terms }
    }

    /// Calculates the EMI, the totals over the full tenure, and the end date.
    ///
    /// The end date is the loan's `start_date` advanced by `tenure_months`
    /// calendar months. All monetary outputs are rounded to the paisa,
    /// half-up.
    ///
    /// # Errors
    ///
    /// Returns [`LoanError::InvalidLoanParameters`] if the terms fail
    /// validation, or [`LoanError::TenureOutOfRange`] if the tenure pushes
    /// the compound factor or the end date past the representable range.
    pub fn calculate(&self) -> Result<EmiResult, LoanError> {
        self.terms.validate()?;

        let end_date = add_months(self.terms.start_date, self.terms.tenure_months).ok_or(
            LoanError::TenureOutOfRange {
                tenure_months: self.terms.tenure_months,
            },
        )?;

        let tenure = Decimal::from(self.terms.tenure_months);
        let rate = self.terms.monthly_rate();

        // Zero-rate loans repay the principal in equal parts.
        if rate.is_zero() {
            return Ok(EmiResult {
                monthly_emi: round_half_up(self.terms.principal / tenure),
                total_payable: round_half_up(self.terms.principal),
                total_interest: Decimal::ZERO,
                end_date,
            });
        }

        let factor = self.compound_factor(rate)?;
        let monthly_emi = self.terms.principal * rate * factor / (factor - Decimal::ONE);
        let total_payable = monthly_emi * tenure;
        let total_interest = total_payable - self.terms.principal;

        Ok(EmiResult {
            monthly_emi: round_half_up(monthly_emi),
            total_payable: round_half_up(total_payable),
            total_interest: round_half_up(total_interest),
            end_date,
        })
    }

    /// `(1 + r)^n` for the tenure.
    fn compound_factor(
        &self,
        rate: Decimal,
    ) -> Result<Decimal, LoanError> {
        (Decimal::ONE + rate)
            .checked_powu(u64::from(self.terms.tenure_months))
            .ok_or(LoanError::TenureOutOfRange {
                tenure_months: self.terms.tenure_months,
            })
    }
}
