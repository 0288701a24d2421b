//! Extraction Request Builder — builds the deterministic extraction request
//! and decodes the service response into a raw JSON mapping.
//!
//! The service is wrapped behind `CandidateExtractor` so the pipeline can be
//! exercised with fakes. Exactly two outcomes: a raw JSON value, or a typed
//! `ExtractionError`. No partial state is created on failure.

use async_trait::async_trait;
use serde_json::Value;

use crate::extraction::prompts::{build_extraction_prompt, EXTRACTION_SYSTEM};
use crate::llm_client::{ExtractionError, LlmClient};

/// The structured-extraction seam. Carried in `AppState` as
/// `Arc<dyn CandidateExtractor>`.
#[async_trait]
pub trait CandidateExtractor: Send + Sync {
    /// Turns raw résumé text into the service's raw JSON mapping.
    async fn extract(&self, resume_text: &str) -> Result<Value, ExtractionError>;
}

/// Production extractor backed by the Groq chat-completions client.
pub struct LlmCandidateExtractor(pub LlmClient);

#[async_trait]
impl CandidateExtractor for LlmCandidateExtractor {
    async fn extract(&self, resume_text: &str) -> Result<Value, ExtractionError> {
        let prompt = build_extraction_prompt(resume_text);
        self.0.call_json(&prompt, EXTRACTION_SYSTEM).await
    }
}
