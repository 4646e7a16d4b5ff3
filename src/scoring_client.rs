use crate::config::Config;
use crate::errors::AppError;
use crate::models::{LivePrediction, LoanApplication, PredictionResult};
use reqwest;
use tracing;

/// Client for the external scoring backend.
#[derive(Clone)]
pub struct ScoringClient {
    client: reqwest::Client,
    predict_url: String,
}

impl ScoringClient {
    /// Creates a new `ScoringClient`.
    ///
    /// Every request is cancelled once `config.backend_timeout` has elapsed,
    /// body download included.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config.backend_timeout)
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("Failed to create scoring client: {}", e))
            })?;

        Ok(Self {
            client,
            predict_url: config.predict_url(),
        })
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    /// Sends one application to the backend and decodes its verdict.
    ///
    /// Exactly one attempt is made; the caller decides what to do on error.
    ///
    /// # Returns
    ///
    /// * `Result<LivePrediction, AppError>` - The decoded verdict and the raw body it came from.
    pub async fn predict(&self, application: &LoanApplication) -> Result<LivePrediction, AppError> {
        tracing::debug!("Forwarding application to scoring backend: {}", self.predict_url);

        let response = self
            .client
            .post(&self.predict_url)
            .json(application)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::BackendHttpError {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let raw = response.bytes().await?;
        let result: PredictionResult = serde_json::from_slice(&raw).map_err(|e| {
            AppError::MalformedResponse(format!("Failed to parse scoring response: {}", e))
        })?;

        tracing::info!(
            "✓ Scoring backend verdict: approved={}, probability={:.2}",
            result.approved,
            result.probability
        );
        Ok(LivePrediction { result, raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = ScoringClient::new(&Config::default());
        assert!(client.is_ok());
        assert_eq!(
            client.unwrap().predict_url(),
            "http://localhost:8000/predict"
        );
    }
}
