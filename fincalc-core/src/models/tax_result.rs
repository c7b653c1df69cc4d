use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of an ITR-1 liability computation.
///
/// `tax_liability` is rounded to the whole rupee (cess folded in); every
/// other monetary field keeps paisa precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    /// Salary plus house-property and other income.
    pub gross_income: Decimal,

    /// Sum of the chapter VI-A deductions and home-loan interest claimed.
    pub total_deductions: Decimal,

    /// Standard deduction actually applied: `min(gross_salary * 0.5, 50 000)`.
    pub standard_deduction: Decimal,

    /// Income the slab table is applied to, floored at zero.
    pub taxable_income: Decimal,

    /// Slab tax plus 4% health-and-education cess, rounded to the rupee.
    pub tax_liability: Decimal,

    /// `tds_deducted - tax_liability`. Positive means a refund is due,
    /// negative means a balance is payable.
    pub refund_or_balance: Decimal,

    /// `tax_liability / gross_income * 100`, or zero on zero gross income.
    pub effective_tax_rate_percent: Decimal,
}
