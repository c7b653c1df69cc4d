use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Salary and deduction figures for one ITR-1 assessment.
///
/// All fields are expected to be non-negative. The calculator does not
/// reject malformed values; it clamps every subtraction at zero and leaves
/// input validation to the [`validators`](crate::validators) module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInputs {
    /// Gross annual salary before any exemption.
    pub gross_salary: Decimal,

    /// House rent allowance received (exempt portion).
    pub hra_received: Decimal,

    /// Leave travel and transport allowance (exempt portion).
    pub lta_transport_allowance: Decimal,

    /// Section 80C investments (ELSS, PPF, life insurance, ...).
    pub deduction_80c: Decimal,

    /// Section 80D health-insurance premiums.
    pub deduction_80d: Decimal,

    /// Section 80E education-loan interest.
    pub deduction_80e: Decimal,

    /// Home-loan interest claimed under section 24(b).
    pub home_loan_interest: Decimal,

    /// Income from house property.
    pub house_property_income: Decimal,

    /// Income from other sources (interest, dividends, ...).
    pub other_income: Decimal,

    /// Tax already deducted at source, credited against the final liability.
    pub tds_deducted: Decimal,
}

impl TaxInputs {
    /// Inputs with every field zero; a convenient base to build from.
    pub fn zero() -> Self {
        Self {
            gross_salary: Decimal::ZERO,
            hra_received: Decimal::ZERO,
            lta_transport_allowance: Decimal::ZERO,
            deduction_80c: Decimal::ZERO,
            deduction_80d: Decimal::ZERO,
            deduction_80e: Decimal::ZERO,
            home_loan_interest: Decimal::ZERO,
            house_property_income: Decimal::ZERO,
            other_income: Decimal::ZERO,
            tds_deducted: Decimal::ZERO,
        }
    }
}
