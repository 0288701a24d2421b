use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// One persisted scored résumé, as stored in `parsed_resumes`.
/// `skills` is a JSONB column holding the ordered skill list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ParsedResumeRow {
    pub id: i32,
    pub filename: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub total_years_experience: f64,
    pub highest_degree: String,
    pub skills: Value,
    pub job_description: String,
    pub score: f64,
    pub parsing_date: DateTime<Utc>,
}
