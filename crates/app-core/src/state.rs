use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tokio::sync::Mutex;
use tracing::{info, warn};

use notify::FraudAlertMailer;
use scoring::{ClaimAssessment, ClaimInput, ScoringEngine};
use store::ClaimStore;

/// Shared handles for the request handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScoringEngine>,
    pub store: Arc<Mutex<ClaimStore>>,
    pub mailer: Arc<FraudAlertMailer>,
}

/// One scored-and-recorded claim evaluation.
#[derive(Debug)]
pub struct Evaluation {
    pub assessment: ClaimAssessment,
    /// Probability as a percentage with one decimal — the form it is
    /// reported and persisted in.
    pub probability_pct: f64,
}

impl AppState {
    pub fn new(engine: ScoringEngine, store: ClaimStore, mailer: FraudAlertMailer) -> Self {
        Self {
            engine: Arc::new(engine),
            store: Arc::new(Mutex::new(store)),
            mailer: Arc::new(mailer),
        }
    }

    /// Score a claim, persist the outcome, and alert the account when the
    /// classifier flags fraud.
    pub async fn evaluate_claim(&self, user_email: &str, claim: &ClaimInput) -> Result<Evaluation> {
        let assessment = self.engine.assess(claim);
        let probability_pct = assessment.prediction.probability_pct();

        {
            let store = self.store.lock().await;
            store
                .record_result(
                    user_email,
                    probability_pct,
                    assessment.prediction.is_fraud,
                    assessment.risk_score,
                    unix_now(),
                )
                .context("failed persisting claim result")?;
        }

        info!(
            user_email,
            probability_pct,
            is_fraud = assessment.prediction.is_fraud,
            risk_score = assessment.risk_score,
            "claim evaluated"
        );

        if assessment.prediction.is_fraud {
            // The evaluation is already recorded; a lost alert is logged,
            // not surfaced as a request failure.
            if let Err(err) = self
                .mailer
                .send_fraud_alert(user_email, probability_pct)
                .await
            {
                warn!(user_email, error = %err, "fraud alert delivery failed");
            }
        }

        Ok(Evaluation {
            assessment,
            probability_pct,
        })
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
