//! Pipeline Orchestrator — sequences extraction, validation, scoring, and
//! persistence, converting each failure mode into a distinct typed outcome.
//!
//! Stages: text → structure → validated record → score → persisted row.
//! Every stage either halts with its own error or hands off to the next; a
//! failure is never swallowed or caught-and-continued. Storage failure is
//! special: the already-computed result rides along with the error so the
//! caller can still report it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::extraction::extractor::CandidateExtractor;
use crate::extraction::schema::{self, CandidateRecord, ValidationError};
use crate::llm_client::ExtractionError;
use crate::scoring;
use crate::store::{ResumeStore, StorageError};

/// The outcome of one successful pipeline run. Created once, never mutated,
/// inserted exactly once.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult {
    pub filename: String,
    pub record: CandidateRecord,
    pub job_description: String,
    pub required_skills: Vec<String>,
    pub score: f64,
    pub parsed_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The document produced no usable text. Nothing downstream ran.
    #[error("no readable text in the uploaded document")]
    NoInput,

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The insert failed after scoring. The computed result is attached so
    /// callers can still report it.
    #[error("failed to persist scored result: {source}")]
    Storage {
        source: StorageError,
        result: Box<ScoredResult>,
    },
}

/// Runs the full pipeline over pre-extracted document text.
///
/// At most one extraction call and one insert per invocation; a caller that
/// wants a retry re-invokes and re-pays the extraction cost.
pub async fn run(
    filename: &str,
    document_text: &str,
    job_description: &str,
    required_skills: &[String],
    extractor: &dyn CandidateExtractor,
    store: &dyn ResumeStore,
) -> Result<ScoredResult, PipelineError> {
    if document_text.trim().is_empty() {
        warn!("pipeline rejected '{filename}': no extractable text");
        return Err(PipelineError::NoInput);
    }

    let raw = extractor.extract(document_text).await?;
    let record = schema::validate(&raw)?;

    let score = scoring::score(&record, required_skills);
    info!(
        "scored '{}' for {}: {score}/100",
        filename, record.email
    );

    let result = ScoredResult {
        filename: filename.to_string(),
        record,
        job_description: job_description.to_string(),
        required_skills: required_skills.to_vec(),
        score,
        parsed_at: Utc::now(),
    };

    if let Err(source) = store.insert(&result).await {
        warn!("persistence failed for '{}': {source}", result.filename);
        return Err(PipelineError::Storage {
            source,
            result: Box::new(result),
        });
    }

    Ok(result)
}
