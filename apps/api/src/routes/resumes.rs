//! Résumé scoring handlers — the caller-facing surface of the pipeline.
//!
//! Cheap request validation happens here, before any collaborator is
//! invoked: the PDF and a non-empty required-skill list must both be present
//! or the request is rejected with a 400.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extraction::pdf;
use crate::models::resume::ParsedResumeRow;
use crate::pipeline::{self, ScoredResult};
use crate::state::AppState;

const DEFAULT_LIST_LIMIT: i64 = 20;

/// POST /api/v1/resumes/score
///
/// Multipart form: `file` (the PDF), `job_description` (text),
/// `required_skills` (comma-separated text).
pub async fn handle_score_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoredResult>, AppError> {
    let mut filename = None;
    let mut document = None;
    let mut job_description = String::new();
    let mut required_skills = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let name = field.name().map(String::from);
        match name.as_deref() {
            Some("file") => {
                filename = field.file_name().map(String::from);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable file field: {e}")))?;
                document = Some(bytes);
            }
            Some("job_description") => {
                job_description = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable job description: {e}")))?;
            }
            Some("required_skills") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable skill list: {e}")))?;
                required_skills = parse_required_skills(&raw);
            }
            _ => {}
        }
    }

    let document = document
        .ok_or_else(|| AppError::Validation("a PDF resume file is required".to_string()))?;
    if required_skills.is_empty() {
        return Err(AppError::Validation(
            "at least one required skill must be provided".to_string(),
        ));
    }
    let filename = filename.unwrap_or_else(|| "resume.pdf".to_string());

    let text = pdf::extract_text(&document);

    let result = pipeline::run(
        &filename,
        &text,
        &job_description,
        &required_skills,
        state.extractor.as_ref(),
        state.store.as_ref(),
    )
    .await?;

    Ok(Json(result))
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

/// GET /api/v1/resumes
/// Recent scored results for review, newest first.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<ParsedResumeRow>>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, 100);
    let rows = state
        .store
        .list_recent(limit)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;
    Ok(Json(rows))
}

/// Splits a comma-separated skill list, trimming whitespace and dropping
/// empty segments.
fn parse_required_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
