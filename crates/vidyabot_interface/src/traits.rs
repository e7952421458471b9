//! Trait definitions for upstream chat models.

use async_trait::async_trait;
use vidyabot_core::{ChatReply, Turn};
use vidyabot_error::GeminiError;

/// Core trait for the upstream generative model the proxy forwards to.
///
/// The proxy handler depends on this trait rather than a concrete client so
/// tests can substitute a mock model. Implementations send exactly one
/// synchronous completion per call and perform no retries; failures
/// propagate to the caller for classification.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate a reply given translated history and the new user message.
    ///
    /// The returned reply always carries non-empty text; implementations
    /// substitute a fixed apology when the upstream completion is empty.
    async fn reply(&self, history: &[Turn], message: &str) -> Result<ChatReply, GeminiError>;

    /// Model identifier (e.g., "gemini-2.0-flash").
    fn model_name(&self) -> &str;
}
