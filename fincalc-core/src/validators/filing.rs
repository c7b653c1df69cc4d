//! ITR-1 filing eligibility rules and identifier format checks.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

// PAN: five letters, four digits, one letter (e.g. AAAPL5055K).
static PAN_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN pattern is valid"));

// Aadhaar: twelve digits.
static AADHAAR_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{12}$").expect("Aadhaar pattern is valid"));

/// Gross-income ceiling for the ITR-1 form: Rs. 50,00,000.
pub fn itr1_income_ceiling() -> Decimal {
    Decimal::from(5_000_000)
}

/// Checks the PAN structure. Case-insensitive: the input is uppercased
/// before matching.
pub fn is_valid_pan_format(pan: &str) -> bool {
    PAN_FORMAT.is_match(&pan.to_uppercase())
}

/// Checks that the Aadhaar number is exactly twelve digits.
pub fn is_valid_aadhaar_format(aadhaar: &str) -> bool {
    AADHAAR_FORMAT.is_match(aadhaar)
}

/// Checks that a tax record is complete enough to file as ITR-1.
///
/// Rules: gross salary under the ITR-1 ceiling, PAN exactly ten characters,
/// Aadhaar exactly twelve digits, TDS non-negative. All violations are
/// reported together.
pub fn validate_tax_data_for_filing(
    gross_salary: Decimal,
    pan: &str,
    aadhaar: &str,
    tds_deducted: Decimal,
) -> super::ValidationOutcome {
    let mut errors = Vec::new();

    if gross_salary >= itr1_income_ceiling() {
        errors.push("income exceeds the Rs. 50,00,000 limit for ITR-1".to_string());
    }

    if pan.len() != 10 {
        errors.push("invalid PAN format".to_string());
    }

    if !is_valid_aadhaar_format(aadhaar) {
        errors.push("invalid Aadhaar format".to_string());
    }

    if tds_deducted < Decimal::ZERO {
        errors.push("TDS deducted cannot be negative".to_string());
    }

    super::ValidationOutcome::from_errors(errors)
}
