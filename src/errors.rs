use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Inbound body is not a JSON object.
    ParseError(String),
    /// Scoring backend answered with a non-success status.
    BackendHttpError {
        /// HTTP status returned by the backend.
        status: u16,
        /// Raw response body, as text.
        body: String,
    },
    /// Scoring backend did not answer within the configured bound.
    BackendTimeout(String),
    /// Scoring backend could not be reached.
    BackendUnreachable(String),
    /// Scoring backend answered with a body that is not a prediction.
    MalformedResponse(String),
    /// Submission fields outside their accepted ranges.
    Validation(Vec<String>),
    /// Bad request error (invalid input).
    BadRequest(String),
    /// Internal server error.
    InternalError(String),
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::BackendHttpError { status, body } => {
                write!(f, "Scoring backend error: {} - {}", status, body)
            }
            AppError::BackendTimeout(msg) => write!(f, "Scoring backend timeout: {}", msg),
            AppError::BackendUnreachable(msg) => {
                write!(f, "Scoring backend unreachable: {}", msg)
            }
            AppError::MalformedResponse(msg) => {
                write!(f, "Malformed scoring response: {}", msg)
            }
            AppError::Validation(violations) => {
                write!(f, "Validation failed: {}", violations.join("; "))
            }
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// The prediction routes never reach this: their errors are absorbed by the
    /// fallback heuristic. It serves the auxiliary routes.
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::ParseError(msg) | AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg }),
            ),
            AppError::Validation(violations) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": "Validation failed", "details": violations }),
            ),
            AppError::BackendHttpError { .. }
            | AppError::BackendTimeout(_)
            | AppError::BackendUnreachable(_)
            | AppError::MalformedResponse(_) => {
                tracing::error!("External API error: {}", self);
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": "Service d'analyse indisponible" }),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    /// Classifies a transport failure from the scoring client.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::BackendTimeout(err.to_string())
        } else if err.is_decode() {
            AppError::MalformedResponse(err.to_string())
        } else {
            AppError::BackendUnreachable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display_carries_status_and_body() {
        let err = AppError::BackendHttpError {
            status: 503,
            body: "upstream down".to_string(),
        };
        assert_eq!(err.to_string(), "Scoring backend error: 503 - upstream down");
    }

    #[test]
    fn test_validation_maps_to_unprocessable_entity() {
        let response =
            AppError::Validation(vec!["credit_score must be between 300 and 850".into()])
                .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_backend_errors_map_to_bad_gateway() {
        let response = AppError::BackendTimeout("10s elapsed".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
