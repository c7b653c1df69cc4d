//! ITR-1 tax liability calculations for individual residents.
//!
//! The computation follows the return's structure:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Gross income: salary + house property + other sources |
//! | 2    | Standard deduction: min(gross salary × 50%, 50,000) |
//! | 3    | Salary income: gross salary − HRA − LTA − standard deduction |
//! | 4    | Total income before deductions (floored at zero) |
//! | 5    | Chapter VI-A deductions: 80C + 80D + 80E + home-loan interest |
//! | 6    | Taxable income: step 4 − step 5 (floored at zero) |
//! | 7    | Slab tax from the marginal-rate table |
//! | 8    | Liability: slab tax × 1.04 (4% cess), rounded to the rupee |
//! | 9    | Refund or balance: TDS − liability |
//!
//! Deduction caps are deliberately not applied here; callers run the
//! [`validators`](crate::validators) first. The calculator itself is total:
//! out-of-range inputs are clamped at each subtraction point rather than
//! rejected.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use fincalc_core::{TaxInputs, TaxSlab};
//! use fincalc_core::calculations::TaxCalculator;
//!
//! let slabs = TaxSlab::fy_2024_25();
//! let calculator = TaxCalculator::new(&slabs);
//!
//! let mut inputs = TaxInputs::zero();
//! inputs.gross_salary = dec!(1050000.00);
//! inputs.tds_deducted = dec!(70000.00);
//!
//! let result = calculator.calculate(&inputs);
//!
//! assert_eq!(result.taxable_income, dec!(1000000.00));
//! assert_eq!(result.tax_liability, dec!(62400));
//! assert_eq!(result.refund_or_balance, dec!(7600.00));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::{max, round_half_up, round_rupee};
use crate::models::{TaxCalculationResult, TaxInputs, TaxSlab};

/// Calculator for ITR-1 tax liability over a marginal-rate slab table.
#[derive(Debug, Clone)]
pub struct TaxCalculator<'a> {
    slabs: &'a [TaxSlab],
}

impl<'a> TaxCalculator<'a> {
    /// Creates a calculator over the given slab table.
    ///
    /// Slabs must be sorted by `lower_bound` ascending and contiguous, with
    /// the last slab unbounded, as [`TaxSlab::fy_2024_25`] provides.
    pub fn new(slabs: &'a [TaxSlab]) -> Self {
        Self { slabs }
    }

    /// Computes the full assessment. Never fails: negative intermediate
    /// values are clamped at zero instead of being rejected.
    pub fn calculate(
        &self,
        inputs: &TaxInputs,
    ) -> TaxCalculationResult {
        // Step 1: gross income across all heads.
        let gross_income = self.gross_income(inputs);

        // Steps 2-3: income from salary after exemptions.
        let standard_deduction = self.standard_deduction(inputs.gross_salary);
        let salary_income = inputs.gross_salary
            - inputs.hra_received
            - inputs.lta_transport_allowance
            - standard_deduction;

        // Step 4: add the other heads back in; a net loss is floored at zero.
        let total_income_before_deductions = max(
            salary_income + inputs.house_property_income + inputs.other_income,
            Decimal::ZERO,
        );

        // Steps 5-6: chapter VI-A deductions, uncapped here.
        let total_deductions = inputs.deduction_80c
            + inputs.deduction_80d
            + inputs.deduction_80e
            + inputs.home_loan_interest;
        let taxable_income = max(total_income_before_deductions - total_deductions, Decimal::ZERO);

        // Steps 7-8: slab tax with cess, whole rupees.
        let tax_liability = self.liability_with_cess(self.tax_on_income(taxable_income));

        // Step 9: TDS credit.
        let refund_or_balance = inputs.tds_deducted - tax_liability;

        let effective_tax_rate_percent = self.effective_rate(tax_liability, gross_income);

        TaxCalculationResult {
            gross_income: round_half_up(gross_income),
            total_deductions: round_half_up(total_deductions),
            standard_deduction: round_half_up(standard_deduction),
            taxable_income: round_half_up(taxable_income),
            tax_liability,
            refund_or_balance: round_half_up(refund_or_balance),
            effective_tax_rate_percent,
        }
    }

    /// Slab tax on `taxable_income`, before cess.
    ///
    /// For each slab whose lower bound lies below the income, the income
    /// falling inside the slab is taxed at the slab's marginal rate. The
    /// result is continuous and non-decreasing in the income, and exact at
    /// slab boundaries.
    pub fn tax_on_income(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut tax = Decimal::ZERO;
        for slab in self.slabs {
            if taxable_income > slab.lower_bound {
                let capped = match slab.upper_bound {
                    Some(upper) => taxable_income.min(upper),
                    None => taxable_income,
                };
                tax += (capped - slab.lower_bound) * slab.rate;
            }
        }
        tax
    }

    fn gross_income(
        &self,
        inputs: &TaxInputs,
    ) -> Decimal {
        inputs.gross_salary + inputs.house_property_income + inputs.other_income
    }

    /// 50% of gross salary, capped at 50,000.
    fn standard_deduction(
        &self,
        gross_salary: Decimal,
    ) -> Decimal {
        (gross_salary * Decimal::new(5, 1)).min(Decimal::from(50_000))
    }

    /// Adds the 4% health-and-education cess and rounds to the whole rupee.
    fn liability_with_cess(
        &self,
        slab_tax: Decimal,
    ) -> Decimal {
        round_rupee(slab_tax * Decimal::new(104, 2))
    }

    fn effective_rate(
        &self,
        tax_liability: Decimal,
        gross_income: Decimal,
    ) -> Decimal {
        if gross_income > Decimal::ZERO {
            round_half_up(tax_liability / gross_income * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        }
    }
}
