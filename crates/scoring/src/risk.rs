use crate::constants::{EXTREME_RISK_THRESHOLD, HIGH_ANOMALY_THRESHOLD, HIGH_RISK_HOSPITAL_ID};
use crate::types::ClaimInput;

const W_ANOMALY: f64 = 0.3;
const W_BILLING: f64 = 0.25;
const W_PROCEDURES: f64 = 0.2;
const W_AMOUNT: f64 = 0.15;
const W_MONTH: f64 = 0.1;

// Nominal scales for the count/amount sub-terms. At these scales the five
// weights sum to 1.0.
const PROCEDURES_SCALE: f64 = 10.0;
const AMOUNT_SCALE: f64 = 100_000.0;

/// Weighted heuristic risk score in [0, 1].
///
/// The clamp is the only bound enforcement: inputs past their nominal
/// scale saturate silently instead of erroring.
pub fn calculate_risk_score(claim: &ClaimInput) -> f64 {
    let risk = W_ANOMALY * claim.anomaly_score
        + W_BILLING * claim.billing_discrepancy
        + W_PROCEDURES * (claim.num_procedures as f64 / PROCEDURES_SCALE)
        + W_AMOUNT * (claim.claim_amount / AMOUNT_SCALE)
        + W_MONTH * claim.claim_month.fraud_risk();
    risk.clamp(0.0, 1.0)
}

/// Human-readable risk flags.
///
/// Each flag is evaluated independently; they are not mutually exclusive
/// and their order is fixed. Empty means no risk factors detected.
pub fn derive_risk_factors(claim: &ClaimInput, risk_score: f64) -> Vec<String> {
    let mut factors = Vec::new();
    if claim.hospital_id == HIGH_RISK_HOSPITAL_ID {
        factors.push(format!("High-risk hospital (ID {})", HIGH_RISK_HOSPITAL_ID));
    }
    if risk_score > EXTREME_RISK_THRESHOLD {
        factors.push(format!("Extreme risk score ({:.2})", risk_score));
    }
    if claim.anomaly_score > HIGH_ANOMALY_THRESHOLD {
        factors.push(format!("High anomaly score ({:.2})", claim.anomaly_score));
    }
    factors
}
