//! Financial calculation modules: loan EMI and amortization, and ITR-1
//! tax liability.
//!
//! Every calculator here is a pure function of its inputs: no I/O, no shared
//! state, safe to call concurrently from any number of request handlers.

pub mod amortization;
pub mod common;
pub mod emi;
pub mod tax;

pub use amortization::AmortizationScheduler;
pub use emi::EmiCalculator;
pub use tax::TaxCalculator;
