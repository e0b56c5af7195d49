use crate::constants::FEATURE_COUNT;
use crate::risk::calculate_risk_score;
use crate::types::ClaimInput;

/// The fixed-order numeric vector consumed by the fraud classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimFeatures {
    pub values: [f64; FEATURE_COUNT],
}

impl ClaimFeatures {
    /// Build the model input vector for one claim.
    ///
    /// Categoricals are replaced by their fixed indices; the two derived
    /// fields land at the tail. Index positions must match `FEATURE_NAMES`.
    pub fn extract(claim: &ClaimInput) -> Self {
        let month_fraud_risk = claim.claim_month.fraud_risk();
        let risk_score = calculate_risk_score(claim);

        let mut values = [0.0f64; FEATURE_COUNT];
        values[0] = claim.patient_age as f64;
        values[1] = claim.gender.index() as f64;
        values[2] = claim.provider_id as f64;
        values[3] = claim.hospital_id as f64;
        values[4] = claim.claim_month.index() as f64;
        values[5] = claim.procedure_type.index() as f64;
        values[6] = claim.diagnosis_code.index() as f64;
        values[7] = claim.claim_amount;
        values[8] = claim.num_procedures as f64;
        values[9] = claim.days_admitted as f64;
        values[10] = claim.previous_claims as f64;
        values[11] = claim.billing_discrepancy;
        values[12] = claim.anomaly_score;
        values[13] = month_fraud_risk;
        values[14] = risk_score;

        Self { values }
    }

    pub fn month_fraud_risk(&self) -> f64 {
        self.values[13]
    }

    pub fn risk_score(&self) -> f64 {
        self.values[14]
    }
}
