//! Stateless rule checks for tax inputs: deduction caps and ITR-1 filing
//! eligibility.
//!
//! Each check evaluates every rule and appends one human-readable message
//! per violation instead of short-circuiting, so a caller gets the complete
//! list of problems in one pass.

mod deductions;
mod filing;

pub use deductions::{limit_80d_for_age, tax_savings_suggestions, validate_deduction_limits};
pub use filing::{
    is_valid_aadhaar_format, is_valid_pan_format, itr1_income_ceiling,
    validate_tax_data_for_filing,
};

use serde::{Deserialize, Serialize};

/// Outcome of a rule evaluation: valid, or a list of violation messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationOutcome {
    pub(crate) fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}
