use std::fmt::Write as _;

use scoring::{ClaimAssessment, FEATURE_NAMES};

#[derive(Debug)]
pub struct Config {
    pub claim_path: String,
}

impl Config {
    pub fn build(mut args: impl Iterator<Item = String>) -> Result<Config, String> {
        args.next();

        let claim_path = match args.next() {
            Some(arg) => arg,
            None => return Err("usage: claimguard-dashboard <claim.json>".to_string()),
        };

        Ok(Config { claim_path })
    }
}

const METER_CELLS: usize = 20;

/// Text meter for a [0, 1] probability, e.g. `[#####...............]`.
pub fn probability_meter(probability: f64) -> String {
    let filled = (probability.clamp(0.0, 1.0) * METER_CELLS as f64).round() as usize;
    let mut meter = String::with_capacity(METER_CELLS + 2);
    meter.push('[');
    for cell in 0..METER_CELLS {
        meter.push(if cell < filled { '#' } else { '.' });
    }
    meter.push(']');
    meter
}

/// The full analysis report: probability, status, risk indicators, and the
/// encoded feature table.
pub fn render_report(assessment: &ClaimAssessment) -> String {
    let prediction = assessment.prediction;
    let mut out = String::new();

    out.push_str("Medical Insurance Claim Analysis\n");
    out.push_str("================================\n\n");
    let _ = writeln!(
        out,
        "Fraud Probability: {:.1}%",
        prediction.probability_pct()
    );
    let _ = writeln!(out, "{}", probability_meter(prediction.probability));
    let _ = writeln!(
        out,
        "Status: {}",
        if prediction.is_fraud {
            "Fraud Detected"
        } else {
            "Legitimate Claim"
        }
    );

    out.push_str("\nKey Risk Indicators\n-------------------\n");
    if assessment.risk_factors.is_empty() {
        out.push_str("No significant risk factors detected.\n");
    } else {
        for factor in &assessment.risk_factors {
            let _ = writeln!(out, "- {}", factor);
        }
    }

    out.push_str("\nEncoded Feature Values\n----------------------\n");
    for (name, value) in FEATURE_NAMES.iter().zip(assessment.features.values.iter()) {
        let _ = writeln!(out, "{:<22} {:>12.4}", name, value);
    }

    out
}

#[cfg(test)]
mod tests;
