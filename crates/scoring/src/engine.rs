use crate::constants::FEATURE_NAMES;
use crate::features::ClaimFeatures;
use crate::math::{dot, sigmoid};
use crate::model::{FraudModel, ModelError};
use crate::risk::derive_risk_factors;
use crate::types::ClaimInput;

/// Classifier verdict for one claim.
#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    pub is_fraud: bool,
    /// Class-1 (fraud) probability in [0, 1].
    pub probability: f64,
}

impl Prediction {
    /// Probability as a percentage with one decimal — the form both
    /// front-ends report and persist, e.g. 0.8745 → 87.5.
    pub fn probability_pct(self) -> f64 {
        (self.probability * 1000.0).round() / 10.0
    }
}

/// Complete evaluation of one claim. Immutable once produced; persisting
/// or alerting on it is the caller's concern.
#[derive(Debug, Clone)]
pub struct ClaimAssessment {
    pub features: ClaimFeatures,
    pub risk_score: f64,
    /// Ordered human-readable flags; empty means none detected.
    pub risk_factors: Vec<String>,
    pub prediction: Prediction,
    /// Top weight × value contributions, for the audit trail.
    pub top_features: Vec<(String, f64)>,
}

/// The scoring engine. Stateless — call `assess()` per claim.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    model: FraudModel,
}

impl ScoringEngine {
    /// Create an engine with the built-in development model.
    pub fn new() -> Self {
        Self {
            model: FraudModel::default(),
        }
    }

    /// Create an engine with a specific, validated artifact.
    pub fn with_model(model: FraudModel) -> Result<Self, ModelError> {
        model.validate()?;
        Ok(Self { model })
    }

    /// Hot-swap the model artifact.
    pub fn reload_model(&mut self, model: FraudModel) -> Result<(), ModelError> {
        model.validate()?;
        self.model = model;
        Ok(())
    }

    pub fn model_id(&self) -> &str {
        &self.model.model_id
    }

    pub fn model_version(&self) -> &str {
        &self.model.model_version
    }

    /// Evaluate one claim: feature extraction, heuristic risk score,
    /// risk flags, and classifier inference.
    pub fn assess(&self, claim: &ClaimInput) -> ClaimAssessment {
        let features = ClaimFeatures::extract(claim);
        let risk_score = features.risk_score();

        let z = dot(&self.model.weights, &features.values) + self.model.bias;
        let probability = sigmoid(z);
        let prediction = Prediction {
            is_fraud: probability >= self.model.threshold,
            probability,
        };

        let mut contributions: Vec<(String, f64)> = FEATURE_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), self.model.weights[i] * features.values[i]))
            .filter(|(_, c)| c.abs() > 0.01)
            .collect();
        contributions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        contributions.truncate(5);

        ClaimAssessment {
            risk_factors: derive_risk_factors(claim, risk_score),
            features,
            risk_score,
            prediction,
            top_features: contributions,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
