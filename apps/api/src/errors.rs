use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assessment::AssessmentError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Analysis parse error: {reason}")]
    AnalysisParse { reason: String, raw: String },

    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AssessmentError> for AppError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::InputValidation(msg) => AppError::Validation(msg),
            AssessmentError::Generation(e) => AppError::Generation(e.to_string()),
            AssessmentError::AnalysisParse { reason, raw } => {
                AppError::AnalysisParse { reason, raw }
            }
            AssessmentError::SchemaViolation(msg) => AppError::SchemaViolation(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Generation(msg) => {
                tracing::error!("Generation service failure: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_ERROR",
                    "Could not get results from the analysis service".to_string(),
                )
            }
            AppError::AnalysisParse { reason, raw } => {
                // The raw model text is the only diagnostic we have; log it in full.
                tracing::error!("Failed to parse analysis ({reason}); raw model output: {raw}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ANALYSIS_PARSE_ERROR",
                    "Failed to parse analysis results".to_string(),
                )
            }
            AppError::SchemaViolation(msg) => {
                tracing::error!("Analysis schema violation: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SCHEMA_VIOLATION",
                    "Analysis results did not match the expected schema".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
