pub mod calculations;
pub mod models;
pub mod validators;
pub mod verify;

pub use models::*;
pub use verify::{FilingEligibility, PanVerification, PanVerifier, PanVerifierError};
