use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use scoring::{
    RawClaim, CLAIM_MONTHS, DIAGNOSIS_CODES, FEATURE_NAMES, GENDERS, PROCEDURE_TYPES,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/claims/categories", get(categories))
        .route("/api/v1/users/register", post(register))
        .route("/api/v1/users/login", post(login))
        .route("/api/v1/claims/analyze", post(analyze))
        .route("/api/v1/claims/history", get(history))
        .layer(cors)
        .with_state(state)
}

type ApiError = (StatusCode, Json<ErrorBody>);

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

fn internal_error(err: anyhow::Error) -> ApiError {
    error!(error = %err, "request failed");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
}

async fn health() -> &'static str {
    "ok"
}

/// The closed categorical sets, in encoding order — what a form renders
/// as its select options.
#[derive(Debug, Serialize)]
struct CategoriesResponse {
    gender: Vec<&'static str>,
    procedure_type: Vec<&'static str>,
    diagnosis_code: Vec<&'static str>,
    claim_month: Vec<&'static str>,
}

async fn categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        gender: GENDERS.iter().map(|g| g.as_str()).collect(),
        procedure_type: PROCEDURE_TYPES.iter().map(|p| p.as_str()).collect(),
        diagnosis_code: DIAGNOSIS_CODES.iter().map(|d| d.as_str()).collect(),
        claim_month: CLAIM_MONTHS.iter().map(|m| m.as_str()).collect(),
    })
}

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    name: String,
    email: String,
    password: String,
    age: Option<u32>,
    location: Option<String>,
}

#[derive(Debug, Serialize)]
struct RegisterResponse {
    user_id: i64,
}

async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let store = state.store.lock().await;
    let created = store
        .register_user(
            &req.name,
            &req.email,
            &req.password,
            req.age,
            req.location.as_deref(),
        )
        .map_err(internal_error)?;
    match created {
        Some(user_id) => Ok(Json(RegisterResponse { user_id })),
        None => Err(api_error(StatusCode::CONFLICT, "email already registered")),
    }
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    user_id: i64,
    name: String,
    email: String,
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let store = state.store.lock().await;
    let account = store
        .authenticate(&req.email, &req.password)
        .map_err(internal_error)?;
    match account {
        Some(account) => Ok(Json(LoginResponse {
            user_id: account.id,
            name: account.name,
            email: account.email,
        })),
        None => Err(api_error(StatusCode::UNAUTHORIZED, "invalid credentials")),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    pub(crate) user_email: String,
    #[serde(flatten)]
    pub(crate) claim: RawClaim,
}

#[derive(Debug, Serialize)]
struct FeatureValue {
    name: &'static str,
    value: f64,
}

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    /// Fraud probability as a percentage with one decimal.
    probability: f64,
    status: &'static str,
    is_fraud: bool,
    risk_score: f64,
    risk_factors: Vec<String>,
    features: Vec<FeatureValue>,
}

async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let claim = req
        .claim
        .parse()
        .map_err(|err| api_error(StatusCode::UNPROCESSABLE_ENTITY, err.to_string()))?;

    let evaluation = state
        .evaluate_claim(&req.user_email, &claim)
        .await
        .map_err(internal_error)?;
    let assessment = &evaluation.assessment;

    let features = FEATURE_NAMES
        .iter()
        .copied()
        .zip(assessment.features.values.iter())
        .map(|(name, value)| FeatureValue {
            name,
            value: *value,
        })
        .collect();

    Ok(Json(AnalyzeResponse {
        probability: evaluation.probability_pct,
        status: if assessment.prediction.is_fraud {
            "Fraud Detected"
        } else {
            "Legitimate Claim"
        },
        is_fraud: assessment.prediction.is_fraud,
        risk_score: assessment.risk_score,
        risk_factors: assessment.risk_factors.clone(),
        features,
    }))
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    email: String,
}

#[derive(Debug, Serialize)]
struct HistoryEntry {
    probability: f64,
    is_fraud: bool,
    risk_score: f64,
    created_at_unix: i64,
}

#[derive(Debug, Serialize)]
struct HistoryResponse {
    email: String,
    results: Vec<HistoryEntry>,
}

async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let store = state.store.lock().await;
    let records = store.history_for(&query.email).map_err(internal_error)?;
    Ok(Json(HistoryResponse {
        email: query.email,
        results: records
            .into_iter()
            .map(|r| HistoryEntry {
                probability: r.probability,
                is_fraud: r.is_fraud,
                risk_score: r.risk_score,
                created_at_unix: r.created_at_unix,
            })
            .collect(),
    }))
}
