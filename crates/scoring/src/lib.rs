mod constants;
mod engine;
mod features;
mod math;
mod model;
mod risk;
mod types;

pub use constants::{FEATURE_COUNT, FEATURE_NAMES, HIGH_RISK_HOSPITAL_ID};
pub use engine::{ClaimAssessment, Prediction, ScoringEngine};
pub use features::ClaimFeatures;
pub use model::{FraudModel, ModelError};
pub use risk::{calculate_risk_score, derive_risk_factors};
pub use types::{
    ClaimInput, ClaimMonth, DiagnosisCode, EncodeError, Gender, ProcedureType, RawClaim,
    CLAIM_MONTHS, DIAGNOSIS_CODES, GENDERS, PROCEDURE_TYPES,
};
