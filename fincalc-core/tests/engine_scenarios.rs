//! End-to-end scenarios exercising the engine the way a request handler
//! would: quote a loan, expand its schedule, assess the tax year, and gate
//! the record on the validators.

use async_trait::async_trait;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fincalc_core::calculations::{AmortizationScheduler, EmiCalculator, TaxCalculator};
use fincalc_core::validators::{validate_deduction_limits, validate_tax_data_for_filing};
use fincalc_core::verify::{
    validate_pan_for_itr_filing, PanVerification, PanVerifier, PanVerifierError,
};
use fincalc_core::{LoanTerms, TaxInputs, TaxSlab};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn loan_lifecycle_quote_and_schedule() {
    init_tracing();
    let terms = LoanTerms {
        principal: dec!(500000.00),
        annual_rate_percent: dec!(10.0),
        tenure_months: 12,
        start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
    };

    let quote = EmiCalculator::new(&terms).calculate().unwrap();
    let schedule = AmortizationScheduler::new(&terms).schedule().unwrap();

    assert_eq!(quote.monthly_emi, dec!(43957.94));
    assert_eq!(quote.end_date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    assert_eq!(schedule.len(), 12);

    // The schedule reconciles with the quote: principal portions return the
    // principal (within per-month rounding drift) and interest portions sum
    // to within the same drift of the quoted total interest.
    let principal_repaid: Decimal = schedule.iter().map(|r| r.principal_portion).sum();
    let interest_paid: Decimal = schedule.iter().map(|r| r.interest_portion).sum();
    assert!((principal_repaid - terms.principal).abs() <= dec!(0.12));
    assert!((interest_paid - quote.total_interest).abs() <= dec!(0.12));

    // Balances only ever decrease, and the last one carries at most the
    // rounding residue of the tenure.
    for pair in schedule.windows(2) {
        assert!(pair[1].remaining_balance <= pair[0].remaining_balance);
    }
    assert!(schedule[11].remaining_balance <= dec!(0.12));
}

#[test]
fn tax_year_assessment_with_validators() {
    init_tracing();
    let mut inputs = TaxInputs::zero();
    inputs.gross_salary = dec!(1050000.00);
    inputs.deduction_80c = dec!(150000.00);
    inputs.deduction_80d = dec!(25000.00);
    inputs.tds_deducted = dec!(70000.00);

    // Caps hold, so the record is safe to assess as-is.
    let caps = validate_deduction_limits(
        inputs.deduction_80c,
        inputs.deduction_80d,
        inputs.deduction_80e,
        inputs.home_loan_interest,
        42,
    );
    assert!(caps.is_valid);

    let filing = validate_tax_data_for_filing(
        inputs.gross_salary,
        "AAAPL5055K",
        "123456789012",
        inputs.tds_deducted,
    );
    assert!(filing.is_valid);

    let slabs = TaxSlab::fy_2024_25();
    let result = TaxCalculator::new(&slabs).calculate(&inputs);

    // Taxable: 1050000 - 50000 standard - 175000 chapter VI-A = 825000.
    // Slab tax: 15000 + 22500 = 37500; with cess 39000.
    assert_eq!(result.taxable_income, dec!(825000.00));
    assert_eq!(result.tax_liability, dec!(39000));
    assert_eq!(result.refund_or_balance, dec!(31000.00));
}

#[test]
fn over_cap_deductions_are_flagged_before_assessment() {
    let caps = validate_deduction_limits(dec!(200000), dec!(0), dec!(0), dec!(0), 42);

    assert!(!caps.is_valid);
    assert!(caps.errors[0].contains("1,50,000"));
}

struct AlwaysVerified;

#[async_trait]
impl PanVerifier for AlwaysVerified {
    async fn verify(&self, pan: &str) -> Result<PanVerification, PanVerifierError> {
        Ok(PanVerification {
            pan: pan.to_string(),
            name: "Asha Rao".to_string(),
            entity_type: "Individual".to_string(),
            verified: true,
        })
    }
}

#[tokio::test]
async fn filing_gate_combines_format_income_and_verifier() {
    init_tracing();
    let verifier = AlwaysVerified;

    let ok = validate_pan_for_itr_filing(&verifier, "AAAPL5055K", dec!(1050000.00)).await;
    let too_rich = validate_pan_for_itr_filing(&verifier, "AAAPL5055K", dec!(7500000.00)).await;

    assert!(ok.eligible);
    assert!(!too_rich.eligible);
}
