//! Month-by-month amortization schedules.
//!
//! Each installment is split into an interest portion (on the open balance)
//! and a principal portion (the remainder of the EMI), and the balance is
//! carried forward. Every intermediate monetary value is rounded to the
//! paisa before the next iteration; the cent-level figures in each row are
//! exactly what downstream reporting prints, so tests assert them exactly
//! rather than to a tolerance. The final balance is clamped at zero when
//! rounding drift would push it negative.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use fincalc_core::LoanTerms;
//! use fincalc_core::calculations::AmortizationScheduler;
//!
//! let terms = LoanTerms {
//!     principal: dec!(100000.00),
//!     annual_rate_percent: dec!(12.0),
//!     tenure_months: 12,
//!     start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
//! };
//!
//! let schedule = AmortizationScheduler::new(&terms).schedule().unwrap();
//!
//! assert_eq!(schedule.len(), 12);
//! assert_eq!(schedule[0].interest_portion, dec!(1000.00));
//! assert_eq!(schedule[11].remaining_balance, dec!(0.00));
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::{add_months, round_half_up};
use crate::calculations::emi::EmiCalculator;
use crate::models::{AmortizationRow, LoanError, LoanTerms};

/// Generator for the full repayment breakdown of a loan.
///
/// Each call recomputes from the terms; the computation is cheap enough
/// that there is nothing to resume or cache.
#[derive(Debug, Clone)]
pub struct AmortizationScheduler<'a> {
    terms: &'a LoanTerms,
}

impl<'a> AmortizationScheduler<'a> {
    /// Creates a scheduler over the given loan terms.
    pub fn new(terms: &'a LoanTerms) -> Self {
        Self { terms }
    }

    /// Generates the schedule: exactly `tenure_months` rows, month ascending.
    ///
    /// Row dates start at the loan's `start_date` and advance one calendar
    /// month per row.
    ///
    /// # Errors
    ///
    /// Propagates the underlying EMI calculation's [`LoanError`] unchanged.
    pub fn schedule(&self) -> Result<Vec<AmortizationRow>, LoanError> {
        let emi = EmiCalculator::new(self.terms).calculate()?;
        let rate = self.terms.monthly_rate();

        let mut remaining_balance = self.terms.principal;
        let mut rows = Vec::with_capacity(self.terms.tenure_months as usize);

        for month in 1..=self.terms.tenure_months {
            let date = add_months(self.terms.start_date, month - 1).ok_or(
                LoanError::TenureOutOfRange {
                    tenure_months: self.terms.tenure_months,
                },
            )?;

            let interest_portion = round_half_up(remaining_balance * rate);
            let principal_portion = round_half_up(emi.monthly_emi - interest_portion);
            remaining_balance = round_half_up(remaining_balance - principal_portion);

            if remaining_balance < Decimal::ZERO {
                warn!(
                    month,
                    drift = %remaining_balance,
                    "clamping negative balance left by rounding drift"
                );
                remaining_balance = Decimal::ZERO;
            }

            rows.push(AmortizationRow {
                month,
                date,
                principal_portion,
                interest_portion,
                remaining_balance,
            });
        }

        Ok(rows)
    }

    /// Returns the outstanding balance after the installment at `month`.
    ///
    /// # Errors
    ///
    /// Returns [`LoanError::InvalidMonthParameter`] when `month` is outside
    /// `[1, tenure_months]`, or any error of the underlying schedule.
    pub fn remaining_balance_at(
        &self,
        month: u32,
    ) -> Result<Decimal, LoanError> {
        if month == 0 || month > self.terms.tenure_months {
            return Err(LoanError::InvalidMonthParameter {
                month,
                tenure_months: self.terms.tenure_months,
            });
        }

        let schedule = self.schedule()?;
        Ok(schedule[(month - 1) as usize].remaining_balance)
    }
}
