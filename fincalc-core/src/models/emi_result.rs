use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The headline figures of a loan, derived deterministically from
/// [`LoanTerms`](crate::LoanTerms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmiResult {
    /// Fixed monthly installment, rounded to the paisa.
    pub monthly_emi: Decimal,

    /// Total amount repaid over the full tenure.
    pub total_payable: Decimal,

    /// Interest component of the total: `total_payable - principal`.
    pub total_interest: Decimal,

    /// Date of the final installment: the loan start date advanced by the
    /// tenure in calendar months.
    pub end_date: NaiveDate,
}
