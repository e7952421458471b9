//! Gemini API client implementation.
//!
//! One client per process, constructed at startup with a fixed system
//! instruction and generation parameters. Each call opens a stateful chat by
//! pre-seeding the request with the translated history, sends exactly the new
//! message, and awaits a single synchronous completion with search grounding
//! enabled.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use vidyabot_core::{ChatReply, Turn, TurnRole};
use vidyabot_error::{GeminiError, GeminiErrorKind};
use vidyabot_interface::ChatModel;

use crate::prompt::{FALLBACK_REPLY, SYSTEM_INSTRUCTION};
use crate::sources::extract_sources;
use crate::wire::{
    ApiErrorBody, Content, GenerateContentRequest, GenerationConfig, GenerationResponse, Part,
    SystemInstruction, Tool,
};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Client for the Gemini `generateContent` API.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    generation: GenerationConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client with the given credential and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: API_BASE.to_string(),
            generation: GenerationConfig::default(),
        }
    }

    /// Override the API base URL. Used by tests pointing at a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Send one completion request and decode the reply.
    #[instrument(skip_all, fields(model = %self.model, history_len = history.len()))]
    async fn generate(&self, history: &[Turn], message: &str) -> Result<ChatReply, GeminiError> {
        let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
        contents.push(Content {
            role: TurnRole::User,
            parts: vec![Part {
                text: message.to_string(),
            }],
        });

        let request = GenerateContentRequest {
            contents,
            system_instruction: SystemInstruction::from_text(SYSTEM_INSTRUCTION),
            generation_config: self.generation,
            tools: vec![Tool::GoogleSearch {}],
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini request failed");
            return Err(GeminiError::new(classify_failure(status.as_u16(), &body)));
        }

        let completion: GenerationResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::InvalidResponse(e.to_string())))?;

        let sources = extract_sources(&completion);
        let text = completion.text();
        let text = if text.trim().is_empty() {
            debug!("Empty completion text, substituting fallback reply");
            FALLBACK_REPLY.to_string()
        } else {
            text
        };

        debug!(reply_len = text.len(), source_count = sources.len(), "Completion received");
        Ok(ChatReply { text, sources })
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    async fn reply(&self, history: &[Turn], message: &str) -> Result<ChatReply, GeminiError> {
        self.generate(history, message).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Classify an upstream failure into a [`GeminiErrorKind`].
///
/// Keys on the HTTP status and the structured `error.status` field first;
/// message substrings (`quota`, `API key`, `API_KEY`) are a documented
/// fallback for bodies without a canonical status.
pub fn classify_failure(status_code: u16, body: &str) -> GeminiErrorKind {
    let detail = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_default();
    let message = detail
        .message
        .unwrap_or_else(|| format!("upstream returned status {status_code}"));
    let canonical = detail.status.unwrap_or_default();

    if matches!(status_code, 401 | 403)
        || matches!(canonical.as_str(), "UNAUTHENTICATED" | "PERMISSION_DENIED")
        || message.contains("API key")
        || message.contains("API_KEY")
    {
        return GeminiErrorKind::Authentication(message);
    }

    if status_code == 429
        || canonical == "RESOURCE_EXHAUSTED"
        || message.to_lowercase().contains("quota")
    {
        return GeminiErrorKind::QuotaExhausted(message);
    }

    GeminiErrorKind::HttpStatus {
        status_code,
        message,
    }
}
