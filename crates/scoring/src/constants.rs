/// Number of features in the classifier's input vector.
pub const FEATURE_COUNT: usize = 15;

/// Feature names in model input order — interpretability / logging.
///
/// This order is the contract with the trained classifier artifact. It must
/// only ever change together with a retrained artifact, never on its own.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "patient_age",
    "gender",
    "provider_id",
    "hospital_id",
    "claim_month",
    "procedure_type",
    "diagnosis_code",
    "claim_amount",
    "num_procedures",
    "days_admitted",
    "previous_claims",
    "billing_discrepancy",
    "anomaly_score",
    "month_fraud_risk",
    "risk_score",
];

/// Hospital id treated as high risk regardless of model output.
pub const HIGH_RISK_HOSPITAL_ID: u32 = 99;

/// Heuristic risk score above this raises the extreme-risk flag.
pub(crate) const EXTREME_RISK_THRESHOLD: f64 = 0.7;

/// Anomaly score above this raises the high-anomaly flag.
pub(crate) const HIGH_ANOMALY_THRESHOLD: f64 = 0.8;
