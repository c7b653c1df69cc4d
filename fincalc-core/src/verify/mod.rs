//! PAN verification seam for ITR filing.
//!
//! The engine does not talk to the government API itself; callers inject a
//! [`PanVerifier`] implementation (an HTTP client in production, a stub in
//! tests), constructed once at process start. The eligibility check folds
//! every failure mode into an ineligible outcome with a reason, so a caller
//! never has to handle an error from it.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::validators::{is_valid_pan_format, itr1_income_ceiling};

/// Errors a [`PanVerifier`] implementation may produce.
#[derive(Debug, Error)]
pub enum PanVerifierError {
    /// The verification service could not be reached.
    #[error("verification service unavailable: {0}")]
    Unavailable(String),

    /// The service answered but rejected the request.
    #[error("verification request rejected: {0}")]
    Rejected(String),
}

/// A verification record returned by the government-API collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanVerification {
    pub pan: String,
    pub name: String,
    pub entity_type: String,
    pub verified: bool,
}

/// Whether tax data may be filed as ITR-1, with a reason when it may not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingEligibility {
    pub eligible: bool,
    pub reason: Option<String>,
}

impl FilingEligibility {
    fn eligible() -> Self {
        Self {
            eligible: true,
            reason: None,
        }
    }

    fn ineligible(reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            reason: Some(reason.into()),
        }
    }
}

/// Collaborator that checks a PAN against government records.
#[async_trait]
pub trait PanVerifier: Send + Sync {
    async fn verify(&self, pan: &str) -> Result<PanVerification, PanVerifierError>;
}

/// Decides whether a PAN holder with the given income may file ITR-1.
///
/// The checks run in order: PAN format, the ITR-1 income ceiling, then the
/// injected verifier. Any failure, including a verifier error, yields an
/// ineligible outcome with a reason; this function never returns an error.
pub async fn validate_pan_for_itr_filing(
    verifier: &dyn PanVerifier,
    pan: &str,
    income: Decimal,
) -> FilingEligibility {
    if !is_valid_pan_format(pan) {
        return FilingEligibility::ineligible("invalid PAN format");
    }

    if income >= itr1_income_ceiling() {
        return FilingEligibility::ineligible(
            "income exceeds the Rs. 50,00,000 ITR-1 limit; use ITR-2 or a higher form",
        );
    }

    match verifier.verify(pan).await {
        Ok(verification) if verification.verified => FilingEligibility::eligible(),
        Ok(_) => FilingEligibility::ineligible(
            "PAN verification failed; please verify your PAN details",
        ),
        Err(error) => {
            warn!(%error, "PAN verification call failed");
            FilingEligibility::ineligible("could not validate PAN")
        }
    }
}
