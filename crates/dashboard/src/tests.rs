use scoring::{
    ClaimInput, ClaimMonth, DiagnosisCode, Gender, ProcedureType, ScoringEngine, FEATURE_COUNT,
};

use super::{probability_meter, render_report, Config};

fn sample_claim() -> ClaimInput {
    ClaimInput {
        patient_age: 45,
        gender: Gender::Male,
        provider_id: 10,
        hospital_id: 5,
        claim_month: ClaimMonth::Jan,
        procedure_type: ProcedureType::RoutineCheck,
        diagnosis_code: DiagnosisCode::I10,
        claim_amount: 5000.0,
        num_procedures: 2,
        days_admitted: 1,
        previous_claims: 1,
        billing_discrepancy: 0.1,
        anomaly_score: 0.1,
    }
}

#[test]
fn config_requires_a_claim_path() {
    let err = Config::build(["claimguard-dashboard".to_string()].into_iter()).unwrap_err();
    assert!(err.contains("usage"));

    let config = Config::build(
        ["claimguard-dashboard".to_string(), "claim.json".to_string()].into_iter(),
    )
    .unwrap();
    assert_eq!(config.claim_path, "claim.json");
}

#[test]
fn meter_spans_empty_to_full() {
    assert_eq!(probability_meter(0.0), format!("[{}]", ".".repeat(20)));
    assert_eq!(probability_meter(1.0), format!("[{}]", "#".repeat(20)));
    assert_eq!(probability_meter(0.5).matches('#').count(), 10);
    // Out-of-range values clamp rather than overflow the meter.
    assert_eq!(probability_meter(7.0), probability_meter(1.0));
}

#[test]
fn report_shows_legitimate_claim_without_indicators() {
    let assessment = ScoringEngine::new().assess(&sample_claim());
    let report = render_report(&assessment);
    assert!(report.contains("Status: Legitimate Claim"));
    assert!(report.contains("No significant risk factors detected."));
}

#[test]
fn report_lists_risk_indicators() {
    let mut claim = sample_claim();
    claim.hospital_id = 99;
    claim.anomaly_score = 0.95;
    claim.billing_discrepancy = 0.9;
    claim.num_procedures = 10;
    claim.claim_amount = 100_000.0;
    claim.claim_month = ClaimMonth::Dec;

    let assessment = ScoringEngine::new().assess(&claim);
    let report = render_report(&assessment);
    assert!(report.contains("Status: Fraud Detected"));
    assert!(report.contains("- High-risk hospital (ID 99)"));
    assert!(report.contains("- Extreme risk score"));
    assert!(report.contains("- High anomaly score (0.95)"));
}

#[test]
fn report_tabulates_every_feature() {
    let assessment = ScoringEngine::new().assess(&sample_claim());
    let report = render_report(&assessment);
    let table = report
        .split("Encoded Feature Values")
        .nth(1)
        .expect("feature table present");
    // Header underline plus one row per feature.
    assert_eq!(table.lines().filter(|l| !l.is_empty()).count(), FEATURE_COUNT + 1);
    assert!(report.contains("month_fraud_risk"));
    assert!(report.contains("risk_score"));
}
