use crate::config::Config;
use crate::errors::AppError;
use crate::form::FormValues;
use crate::models::{LoanApplication, PredictionOutcome, PredictionSource};
use crate::prediction::{self, PredictionService};
use crate::render::{render, RenderedVerdict};
use crate::scoring_client::ScoringClient;
use crate::transform::parse_submission;
use axum::{
    body::{to_bytes, Body, Bytes},
    extract::State,
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// Response header telling which path produced a verdict.
pub const PREDICTION_SOURCE_HEADER: &str = "x-prediction-source";

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Adapter in front of the scoring backend.
    pub predictions: PredictionService,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let client = ScoringClient::new(&config)?;
        Ok(Self {
            config,
            predictions: PredictionService::new(client),
        })
    }
}

/// Health check endpoint.
///
/// # Returns
///
/// * `(StatusCode, Json<serde_json::Value>)` - HTTP 200 OK with health status JSON.
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "loan-eligibility-api",
            "version": env!("CARGO_PKG_VERSION"),
            "scoring_backend": state.config.predict_url(),
        })),
    )
}

/// POST /predict
///
/// Forwards the submitted fields to the scoring backend. Always answers 200:
/// backend failures and unreadable bodies (oversized ones included) are
/// replaced by a heuristic verdict, flagged only through the
/// `x-prediction-source` header. A live answer is relayed byte for byte.
pub async fn predict(State(state): State<Arc<AppState>>, body: Body) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("predict", request_id = %request_id);

    let outcome = async {
        match to_bytes(body, state.config.max_body_bytes).await {
            Ok(bytes) => state.predictions.predict(&bytes).await,
            Err(e) => {
                let cause = AppError::BadRequest(format!("Request body unreadable: {}", e));
                tracing::warn!("{}", cause);
                PredictionOutcome::Degraded(prediction::terminal(&cause))
            }
        }
    }
    .instrument(span)
    .await;

    prediction_response(outcome)
}

fn prediction_response(outcome: PredictionOutcome) -> Response {
    let source = outcome.source();
    let mut response = match outcome {
        PredictionOutcome::Live(live) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            live.raw,
        )
            .into_response(),
        PredictionOutcome::Degraded(degraded) => {
            (StatusCode::OK, Json(degraded.result)).into_response()
        }
    };
    response.headers_mut().insert(
        HeaderName::from_static(PREDICTION_SOURCE_HEADER),
        HeaderValue::from_static(source.as_str()),
    );
    response
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub source: PredictionSource,
    pub verdict: RenderedVerdict,
}

/// POST /api/v1/simulation
///
/// Runs the whole simulator for raw form inputs: derives the ratio, calls the
/// adapter and renders the verdict.
pub async fn simulate(
    State(state): State<Arc<AppState>>,
    Json(form): Json<FormValues>,
) -> Result<Json<SimulationResponse>, AppError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("simulate", request_id = %request_id);

    let body = serde_json::to_vec(&form.to_submission())
        .map_err(|e| AppError::InternalError(format!("Failed to encode submission: {}", e)))?;
    let outcome = state.predictions.predict(&body).instrument(span).await;

    tracing::info!(
        "Simulation complete: source={}, approved={}",
        outcome.source().as_str(),
        outcome.result().approved
    );

    Ok(Json(SimulationResponse {
        source: outcome.source(),
        verdict: render(outcome.result(), &form),
    }))
}

/// POST /api/v1/validate
///
/// Checks a submission against the form's accepted ranges.
pub async fn validate_application(body: Bytes) -> Result<Json<serde_json::Value>, AppError> {
    let submission = parse_submission(&body)?;
    let application = LoanApplication::from_submission(&submission);
    application.validate()?;

    Ok(Json(json!({
        "valid": true,
        "application": application,
    })))
}
