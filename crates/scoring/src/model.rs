use serde::{Deserialize, Serialize};

use crate::constants::{FEATURE_COUNT, FEATURE_NAMES};

/// Serializable classifier weights — loaded from JSON at startup.
///
/// Stands in for the externally trained artifact: the service only depends
/// on its inference contract (15-feature vector in, class-1 probability
/// out), so the artifact ships as a validated weight file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudModel {
    /// Human-readable model identifier.
    pub model_id: String,
    /// Semantic version of the artifact.
    pub model_version: String,
    /// Weight vector (length = FEATURE_COUNT).
    pub weights: Vec<f64>,
    /// Bias (intercept) term.
    pub bias: f64,
    /// Decision threshold: probability ≥ threshold → fraud.
    pub threshold: f64,
    /// Feature names in training order. Optional, but when present it must
    /// match `FEATURE_NAMES` exactly — the encoding contract is versioned
    /// with the artifact.
    #[serde(default)]
    pub feature_names: Vec<String>,
}

impl FraudModel {
    /// Validate that the artifact is structurally sound.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.weights.len() != FEATURE_COUNT {
            return Err(ModelError::DimensionMismatch {
                expected: FEATURE_COUNT,
                got: self.weights.len(),
            });
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ModelError::InvalidThreshold(self.threshold));
        }
        for (i, &w) in self.weights.iter().enumerate() {
            if !w.is_finite() {
                return Err(ModelError::NonFiniteWeight { index: i, value: w });
            }
        }
        if !self.bias.is_finite() {
            return Err(ModelError::NonFiniteBias(self.bias));
        }
        if !self.feature_names.is_empty() {
            if self.feature_names.len() != FEATURE_COUNT {
                return Err(ModelError::DimensionMismatch {
                    expected: FEATURE_COUNT,
                    got: self.feature_names.len(),
                });
            }
            for (i, name) in self.feature_names.iter().enumerate() {
                if name != FEATURE_NAMES[i] {
                    return Err(ModelError::FeatureOrderMismatch {
                        index: i,
                        expected: FEATURE_NAMES[i],
                        got: name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Load and validate an artifact from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json).map_err(ModelError::ParseJson)?;
        model.validate()?;
        Ok(model)
    }

    /// Load and validate an artifact from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(ModelError::Io)?;
        Self::from_json(&content)
    }
}

/// Hand-tuned development model. Weight magnitudes reflect feature scale:
/// raw currency amounts and counts carry tiny weights, the normalized
/// [0, 1] signals and the composite risk score carry the load.
impl Default for FraudModel {
    fn default() -> Self {
        Self {
            model_id: "claimguard-default-v1".to_string(),
            model_version: "1.0.0".to_string(),
            weights: vec![
                0.0,     // patient_age          — no signal on its own
                0.0,     // gender
                0.0,     // provider_id          — identifier, not a scale
                0.0,     // hospital_id          — sentinel handled by flags
                0.1,     // claim_month          — later index, later month
                0.0,     // procedure_type
                0.0,     // diagnosis_code
                0.00001, // claim_amount         — 100k → 1.0
                0.05,    // num_procedures
                0.02,    // days_admitted
                0.15,    // previous_claims      — repeat claimants
                1.2,     // billing_discrepancy
                1.6,     // anomaly_score
                0.8,     // month_fraud_risk
                3.0,     // risk_score           — composite carries most weight
            ],
            bias: -3.2,
            threshold: 0.5,
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug)]
pub enum ModelError {
    DimensionMismatch {
        expected: usize,
        got: usize,
    },
    InvalidThreshold(f64),
    NonFiniteWeight {
        index: usize,
        value: f64,
    },
    NonFiniteBias(f64),
    FeatureOrderMismatch {
        index: usize,
        expected: &'static str,
        got: String,
    },
    ParseJson(serde_json::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch { expected, got } => {
                write!(f, "weight dimension mismatch: expected {expected}, got {got}")
            }
            Self::InvalidThreshold(t) => write!(f, "threshold {t} not in [0, 1]"),
            Self::NonFiniteWeight { index, value } => {
                write!(f, "non-finite weight at index {index}: {value}")
            }
            Self::NonFiniteBias(b) => write!(f, "non-finite bias: {b}"),
            Self::FeatureOrderMismatch {
                index,
                expected,
                got,
            } => write!(
                f,
                "feature order mismatch at index {index}: expected {expected:?}, got {got:?}"
            ),
            Self::ParseJson(e) => write!(f, "model JSON parse error: {e}"),
            Self::Io(e) => write!(f, "model file IO error: {e}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ParseJson(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}
