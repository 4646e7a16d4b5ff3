/// Prediction adapter
///
/// Forwards a submission to the scoring backend and, whatever goes wrong,
/// answers with a verdict: the backend's own when it is available, the
/// rule-based stand-in otherwise.
use crate::errors::AppError;
use crate::models::{DegradedModeResult, LoanApplication, PredictionOutcome, PredictionSource};
use crate::risk::{self, RiskInputs};
use crate::scoring_client::ScoringClient;
use crate::transform::parse_submission;

#[derive(Clone)]
pub struct PredictionService {
    client: ScoringClient,
}

impl PredictionService {
    pub fn new(client: ScoringClient) -> Self {
        Self { client }
    }

    /// Run the adapter on a raw inbound body. Never fails.
    pub async fn predict(&self, body: &[u8]) -> PredictionOutcome {
        match self.try_live(body).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("Scoring unavailable, using fallback heuristic: {}", e);
                PredictionOutcome::Degraded(fallback(body, &e))
            }
        }
    }

    async fn try_live(&self, body: &[u8]) -> Result<PredictionOutcome, AppError> {
        let submission = parse_submission(body)?;
        let application = LoanApplication::from_submission(&submission);
        let live = self.client.predict(&application).await?;
        Ok(PredictionOutcome::Live(live))
    }
}

/// Heuristic verdict for a body the backend could not score.
///
/// Re-reads the body; if it is not a JSON object the canned terminal result
/// is returned instead.
pub fn fallback(body: &[u8], cause: &AppError) -> DegradedModeResult {
    match parse_submission(body) {
        Ok(submission) => {
            let inputs = RiskInputs::from_submission(&submission);
            tracing::debug!("Fallback inputs: {:?}", inputs);
            DegradedModeResult {
                source: PredictionSource::Fallback,
                result: risk::assess(&inputs),
                cause: cause.to_string(),
            }
        }
        Err(e) => {
            tracing::error!("Submission unreadable, using terminal fallback: {}", e);
            terminal(cause)
        }
    }
}

/// Canned verdict for a submission that cannot be read at all.
pub fn terminal(cause: &AppError) -> DegradedModeResult {
    DegradedModeResult {
        source: PredictionSource::TerminalFallback,
        result: risk::terminal_result(),
        cause: cause.to_string(),
    }
}
