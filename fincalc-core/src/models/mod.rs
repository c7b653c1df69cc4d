mod amortization_row;
mod emi_result;
mod loan_terms;
mod tax_inputs;
mod tax_result;
mod tax_slab;

pub use amortization_row::AmortizationRow;
pub use emi_result::EmiResult;
pub use loan_terms::{LoanError, LoanTerms};
pub use tax_inputs::TaxInputs;
pub use tax_result::TaxCalculationResult;
pub use tax_slab::TaxSlab;
