use crate::constants::FEATURE_COUNT;

pub(crate) fn dot(weights: &[f64], features: &[f64; FEATURE_COUNT]) -> f64 {
    weights
        .iter()
        .zip(features.iter())
        .map(|(w, x)| w * x)
        .sum()
}

/// Logistic sigmoid, stable for large |z|.
pub(crate) fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let ez = z.exp();
        ez / (1.0 + ez)
    }
}
