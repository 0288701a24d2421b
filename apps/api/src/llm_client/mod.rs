/// LLM Client — the single point of entry for all structured-extraction calls.
///
/// ARCHITECTURAL RULE: No other module may call the Groq API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: llama-3.1-8b-instant (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for all extraction calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "llama-3.1-8b-instant";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Failure taxonomy for the structured-extraction service.
///
/// The two variants exist so callers can pick different remediation:
/// `ServiceUnavailable` is worth retrying (explicitly, by re-running the
/// pipeline); `MalformedResponse` means the model produced garbage and a
/// retry with the same request may or may not help. The client itself never
/// retries — one attempt per pipeline run.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("extraction service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("extraction service returned malformed JSON: {detail}")]
    MalformedResponse { detail: String, body: String },
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat<'a>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// The single LLM client used by the extraction pipeline.
/// Wraps the Groq OpenAI-compatible chat-completions API.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
        })
    }

    /// Makes a single chat-completion call and returns the raw text content.
    ///
    /// Exactly one attempt: transport errors, timeouts, non-success statuses,
    /// and empty responses all surface as `ServiceUnavailable`. The caller
    /// decides whether to re-run the pipeline.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<String, ExtractionError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ExtractionError::ServiceUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("extraction service returned {status}: {body}");
            return Err(ExtractionError::ServiceUnavailable(format!(
                "status {status}: {body}"
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExtractionError::ServiceUnavailable(format!("unreadable body: {e}")))?;

        if let Some(usage) = &chat.usage {
            debug!(
                "extraction call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        chat.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| ExtractionError::ServiceUnavailable("empty completion".to_string()))
    }

    /// Calls the LLM and parses the text response as a JSON value.
    /// The prompt must instruct the model to return a single JSON object.
    pub async fn call_json(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<serde_json::Value, ExtractionError> {
        let text = self.call(prompt, system).await?;

        // Strip markdown code fences if the model wraps JSON in them
        let stripped = strip_json_fences(&text);

        serde_json::from_str(stripped).map_err(|e| ExtractionError::MalformedResponse {
            detail: e.to_string(),
            body: text.clone(),
        })
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
