//! HTTP transport to the proxy.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use vidyabot_core::{ChatReply, Message};
use vidyabot_error::HttpError;

/// Request body of `POST /api/chat`.
#[derive(Debug, Serialize)]
struct ChatRequestBody<'a> {
    message: &'a str,
    history: &'a [Message],
}

/// Error body the proxy returns on failure.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// The exchange the dispatcher performs for each user turn.
///
/// Implemented by [`HttpBackend`] in production and by mocks in tests.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send the full history (greeting included, new message last) plus the
    /// new message text, and await the bot's reply.
    async fn send(&self, history: &[Message], message: &str) -> Result<ChatReply, HttpError>;
}

/// Backend that posts to the proxy's `/api/chat` endpoint.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    /// Create a backend targeting the proxy at `base_url`.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/api/chat", base_url.as_ref().trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    #[instrument(skip_all, fields(history_len = history.len()))]
    async fn send(&self, history: &[Message], message: &str) -> Result<ChatReply, HttpError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&ChatRequestBody { message, history })
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the server's error string over the bare status.
            let body: ErrorBody = response.json().await.unwrap_or_default();
            let message = body
                .error
                .unwrap_or_else(|| format!("Server responded with status: {status}"));
            return Err(HttpError::new(message));
        }

        debug!("Chat reply received");
        response
            .json::<ChatReply>()
            .await
            .map_err(|e| HttpError::new(e.to_string()))
    }
}
