use axum::body::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============ Scoring Request ============

/// Applicant and loan record forwarded to the scoring backend.
///
/// Numeric fields are already coerced (see `transform`); categorical fields are
/// passed through exactly as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    /// Applicant age in years.
    pub person_age: f64,
    /// "male" or "female".
    pub person_gender: Option<String>,
    /// Highest education level (e.g., "Bachelor").
    pub person_education: Option<String>,
    /// Annual income.
    pub person_income: f64,
    /// Years of professional experience.
    pub person_emp_exp: f64,
    /// "RENT", "OWN", "MORTGAGE" or "OTHER".
    pub person_home_ownership: Option<String>,
    /// Requested loan amount.
    pub loan_amnt: f64,
    /// Loan purpose (e.g., "PERSONAL", "EDUCATION").
    pub loan_intent: Option<String>,
    /// Interest rate in percent.
    pub loan_int_rate: f64,
    /// `loan_amnt / person_income`, recomputed server side.
    pub loan_percent_income: f64,
    /// Length of credit history in years.
    pub cb_person_cred_hist_length: f64,
    /// Credit score (300-850).
    pub credit_score: f64,
    /// "Yes" or "No".
    pub previous_loan_defaults_on_file: Option<String>,
}

// ============ Scoring Response ============

/// Qualitative assessment of a single analysis factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorStatus {
    Favorable,
    Neutre,
    #[serde(rename = "Risqué")]
    Risque,
}

/// One explanatory factor of a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFactor {
    pub name: String,
    /// Display value, already formatted (e.g., "20.0%").
    pub value: String,
    pub status: FactorStatus,
    /// Weight of the factor, 0-100.
    pub importance: f64,
}

/// Verdict returned to the form, either from the backend or synthesized locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub approved: bool,
    /// Approval probability in `[0, 1]`.
    pub probability: f64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub analysis_factors: Vec<AnalysisFactor>,
    /// Raw model class, when the backend provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_importance: Option<BTreeMap<String, f64>>,
}

// ============ Prediction Outcome ============

/// Where a verdict came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PredictionSource {
    /// Answered by the scoring backend.
    Live,
    /// Rule-based stand-in computed from the submitted fields.
    Fallback,
    /// Canned answer used when the submission itself is unreadable.
    TerminalFallback,
}

impl PredictionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionSource::Live => "live",
            PredictionSource::Fallback => "fallback",
            PredictionSource::TerminalFallback => "terminal-fallback",
        }
    }
}

/// Backend answer together with the exact bytes it was decoded from.
#[derive(Debug, Clone)]
pub struct LivePrediction {
    pub result: PredictionResult,
    pub raw: Bytes,
}

/// Heuristic stand-in for a backend answer.
#[derive(Debug, Clone, PartialEq)]
pub struct DegradedModeResult {
    /// `Fallback` or `TerminalFallback`.
    pub source: PredictionSource,
    pub result: PredictionResult,
    /// Why the backend answer was not used.
    pub cause: String,
}

#[derive(Debug, Clone)]
pub enum PredictionOutcome {
    Live(LivePrediction),
    Degraded(DegradedModeResult),
}

impl PredictionOutcome {
    pub fn source(&self) -> PredictionSource {
        match self {
            PredictionOutcome::Live(_) => PredictionSource::Live,
            PredictionOutcome::Degraded(degraded) => degraded.source,
        }
    }

    pub fn result(&self) -> &PredictionResult {
        match self {
            PredictionOutcome::Live(live) => &live.result,
            PredictionOutcome::Degraded(degraded) => &degraded.result,
        }
    }
}
