use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of an amortization schedule.
///
/// Rows are ordered by `month` ascending; `remaining_balance` never
/// increases from one row to the next and never goes below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Installment number, `1..=tenure_months`.
    pub month: u32,

    /// Due date of this installment.
    pub date: NaiveDate,

    /// Portion of the installment that repays principal.
    pub principal_portion: Decimal,

    /// Portion of the installment that pays interest on the open balance.
    pub interest_portion: Decimal,

    /// Outstanding principal after this installment, clamped at zero.
    pub remaining_balance: Decimal,
}
