use notify::{FraudAlertMailer, MailerConfig};
use scoring::{ClaimInput, ClaimMonth, DiagnosisCode, Gender, ProcedureType, ScoringEngine};
use store::ClaimStore;

use crate::routes::AnalyzeRequest;
use crate::state::AppState;

fn test_state() -> AppState {
    AppState::new(
        ScoringEngine::new(),
        ClaimStore::open_in_memory().unwrap(),
        FraudAlertMailer::new(MailerConfig::default()),
    )
}

fn low_risk_claim() -> ClaimInput {
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

fn high_risk_claim() -> ClaimInput {
    ClaimInput {
        claim_month: ClaimMonth::Dec,
        claim_amount: 95_000.0,
        num_procedures: 9,
        days_admitted: 20,
        previous_claims: 8,
        billing_discrepancy: 0.9,
        anomaly_score: 0.95,
        ..low_risk_claim()
    }
}

#[tokio::test]
async fn evaluation_is_persisted() {
    let state = test_state();
    let evaluation = state
        .evaluate_claim("ada@example.com", &low_risk_claim())
        .await
        .unwrap();
    assert!(!evaluation.assessment.prediction.is_fraud);

    let store = state.store.lock().await;
    let history = store.history_for("ada@example.com").unwrap();
    assert_eq!(history.len(), 1);
    assert!(!history[0].is_fraud);
    assert_eq!(history[0].probability, evaluation.probability_pct);
}

#[tokio::test]
async fn fraud_claim_is_recorded_as_fraud() {
    // Mailer defaults to dry-run, so the alert path runs without a gateway.
    let state = test_state();
    let evaluation = state
        .evaluate_claim("ada@example.com", &high_risk_claim())
        .await
        .unwrap();
    assert!(evaluation.assessment.prediction.is_fraud);
    assert!(evaluation.probability_pct > 50.0);

    let store = state.store.lock().await;
    let history = store.history_for("ada@example.com").unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].is_fraud);
}

#[test]
fn analyze_request_accepts_flat_form_payload() {
    let req: AnalyzeRequest = serde_json::from_str(
        r#"{
            "user_email": "ada@example.com",
            "patient_age": 45,
            "gender": "Female",
            "provider_id": 10,
            "hospital_id": 99,
            "claim_month": "Dec",
            "procedure_type": "MRI Scan",
            "diagnosis_code": "C34",
            "claim_amount": 12000.0,
            "num_procedures": 3,
            "days_admitted": 2,
            "previous_claims": 0,
            "billing_discrepancy": 0.2,
            "anomaly_score": 0.3
        }"#,
    )
    .unwrap();
    assert_eq!(req.user_email, "ada@example.com");
    let claim = req.claim.parse().unwrap();
    assert_eq!(claim.hospital_id, 99);
    assert_eq!(claim.procedure_type, ProcedureType::MriScan);
}
