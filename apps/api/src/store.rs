//! Persistence store — one row per scored résumé, unique on candidate email.
//!
//! The store is the only shared mutable resource across pipeline runs; its
//! unique email constraint is the sole cross-run coordination point. Wrapped
//! behind `ResumeStore` so the pipeline can be exercised with an in-memory
//! fake.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::resume::ParsedResumeRow;
use crate::pipeline::ScoredResult;

#[derive(Debug, Error)]
pub enum StorageError {
    /// A result for this candidate email has already been stored.
    #[error("candidate '{0}' has already been scored")]
    DuplicateKey(String),

    #[error("storage connection failure: {0}")]
    Connection(String),
}

/// The persistence seam. Exactly one insert per successful pipeline run.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn insert(&self, result: &ScoredResult) -> Result<(), StorageError>;

    /// Recent scored results for review, newest first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<ParsedResumeRow>, StorageError>;
}

/// Postgres-backed store over the shared connection pool.
pub struct PgResumeStore(pub PgPool);

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn insert(&self, result: &ScoredResult) -> Result<(), StorageError> {
        let skills = serde_json::to_value(&result.record.skills)
            .map_err(|e| StorageError::Connection(format!("skills serialization: {e}")))?;

        sqlx::query(
            r#"
            INSERT INTO parsed_resumes
                (filename, name, email, phone, total_years_experience,
                 highest_degree, skills, job_description, score, parsing_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&result.filename)
        .bind(&result.record.name)
        .bind(&result.record.email)
        .bind(&result.record.phone)
        .bind(result.record.total_years_experience)
        .bind(&result.record.highest_degree)
        .bind(skills)
        .bind(&result.job_description)
        .bind(result.score)
        .bind(result.parsed_at)
        .execute(&self.0)
        .await
        .map_err(|e| map_insert_error(e, &result.record.email))?;

        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ParsedResumeRow>, StorageError> {
        sqlx::query_as::<_, ParsedResumeRow>(
            "SELECT * FROM parsed_resumes ORDER BY parsing_date DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.0)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

fn map_insert_error(error: sqlx::Error, email: &str) -> StorageError {
    match &error {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StorageError::DuplicateKey(email.to_string())
        }
        _ => StorageError::Connection(error.to_string()),
    }
}
