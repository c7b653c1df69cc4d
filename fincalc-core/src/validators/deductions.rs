//! Deduction-cap rules per the Indian income-tax act.

use rust_decimal::Decimal;

/// Section 80D cap by the taxpayer's age: 25,000 under 60; 50,000 for
/// senior citizens (60-79); 1,00,000 for very senior citizens (80+).
pub fn limit_80d_for_age(age: u32) -> Decimal {
    if age >= 80 {
        Decimal::from(100_000)
    } else if age >= 60 {
        Decimal::from(50_000)
    } else {
        Decimal::from(25_000)
    }
}

/// Checks each claimed deduction against its statutory cap.
///
/// Caps: 80C at 1,50,000; 80D per [`limit_80d_for_age`]; 80E at 1,00,000;
/// home-loan interest (section 24b) at 2,00,000. Every exceeded cap appends
/// one message; nothing short-circuits.
pub fn validate_deduction_limits(
    deduction_80c: Decimal,
    deduction_80d: Decimal,
    deduction_80e: Decimal,
    home_loan_interest: Decimal,
    age: u32,
) -> super::ValidationOutcome {
    let mut errors = Vec::new();

    if deduction_80c > Decimal::from(150_000) {
        errors.push("deduction under 80C exceeds the maximum limit of Rs. 1,50,000".to_string());
    }

    let limit_80d = limit_80d_for_age(age);
    if deduction_80d > limit_80d {
        errors.push(format!(
            "deduction under 80D exceeds the maximum limit of Rs. {limit_80d}"
        ));
    }

    if deduction_80e > Decimal::from(100_000) {
        errors.push("deduction under 80E exceeds the maximum limit of Rs. 1,00,000".to_string());
    }

    if home_loan_interest > Decimal::from(200_000) {
        errors.push(
            "home loan interest deduction exceeds the maximum limit of Rs. 2,00,000".to_string(),
        );
    }

    super::ValidationOutcome::from_errors(errors)
}

/// Suggests remaining headroom under sections 80C and 80D.
///
/// Returns one message per section that is not yet claimed to its cap;
/// empty when both are exhausted.
pub fn tax_savings_suggestions(
    deduction_80c: Decimal,
    deduction_80d: Decimal,
    age: u32,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    let limit_80c = Decimal::from(150_000);
    if deduction_80c < limit_80c {
        let gap = limit_80c - deduction_80c;
        suggestions.push(format!(
            "you can invest Rs. {gap} more under section 80C (ELSS, PPF, life insurance)"
        ));
    }

    let limit_80d = limit_80d_for_age(age);
    if deduction_80d < limit_80d {
        let gap = limit_80d - deduction_80d;
        suggestions.push(format!(
            "you can claim Rs. {gap} more under section 80D (health insurance)"
        ));
    }

    suggestions
}
