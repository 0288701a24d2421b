use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::schema::ValidationError;
use crate::llm_client::ExtractionError;
use crate::pipeline::{PipelineError, ScoredResult};
use crate::store::StorageError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every pipeline failure maps to a distinct code so callers can act on the
/// kind, not the prose. Storage failures keep the computed result in the
/// response body — the score is not discarded because the insert failed.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No readable text in the uploaded document")]
    NoInput,

    #[error("Extraction service unavailable: {0}")]
    ExtractionUnavailable(String),

    #[error("Extraction service returned malformed JSON: {0}")]
    ExtractionMalformed(String),

    /// The LLM output did not match the candidate schema. Carries the raw
    /// payload for operator inspection.
    #[error("Schema validation failed: {0}")]
    SchemaValidation(ValidationError),

    /// This candidate email was already scored. The freshly computed result
    /// is still reported.
    #[error("Candidate '{email}' has already been scored")]
    AlreadyScored {
        email: String,
        result: Box<ScoredResult>,
    },

    /// Storage failed after scoring. The computed result is still reported.
    #[error("Storage error: {detail}")]
    Storage {
        detail: String,
        result: Box<ScoredResult>,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::NoInput => AppError::NoInput,
            PipelineError::Extraction(ExtractionError::ServiceUnavailable(detail)) => {
                AppError::ExtractionUnavailable(detail)
            }
            PipelineError::Extraction(ExtractionError::MalformedResponse { detail, body }) => {
                AppError::ExtractionMalformed(format!("{detail}; body was: {body}"))
            }
            PipelineError::Validation(v) => AppError::SchemaValidation(v),
            PipelineError::Storage { source, result } => match source {
                StorageError::DuplicateKey(email) => AppError::AlreadyScored { email, result },
                StorageError::Connection(detail) => AppError::Storage { detail, result },
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, extra) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                None,
            ),
            AppError::NoInput => (
                StatusCode::BAD_REQUEST,
                "NO_INPUT",
                "The uploaded document contains no readable text".to_string(),
                None,
            ),
            AppError::ExtractionUnavailable(detail) => {
                tracing::error!("extraction service unavailable: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EXTRACTION_UNAVAILABLE",
                    "The extraction service could not be reached".to_string(),
                    None,
                )
            }
            AppError::ExtractionMalformed(detail) => {
                tracing::error!("malformed extraction response: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EXTRACTION_MALFORMED",
                    "The extraction service returned invalid JSON".to_string(),
                    None,
                )
            }
            AppError::SchemaValidation(v) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "SCHEMA_VALIDATION",
                format!("Field '{}': {}", v.field, v.reason),
                Some(json!({ "raw_payload": v.raw_payload })),
            ),
            AppError::AlreadyScored { email, result } => (
                StatusCode::CONFLICT,
                "ALREADY_SCORED",
                format!("Candidate '{email}' has already been scored"),
                Some(json!({ "result": result })),
            ),
            AppError::Storage { detail, result } => {
                tracing::error!("storage error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "The scored result could not be persisted".to_string(),
                    Some(json!({ "result": result })),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": {
                "code": code,
                "message": message
            }
        });
        if let Some(extra) = extra {
            for (k, v) in extra.as_object().into_iter().flatten() {
                body[k] = v.clone();
            }
        }

        (status, Json(body)).into_response()
    }
}
