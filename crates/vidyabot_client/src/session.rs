//! Chat session: conversation state plus turn dispatch.

use crate::ChatBackend;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use vidyabot_core::{Conversation, Message};

/// Greeting seeded at index 0 of every session.
pub const DEFAULT_GREETING: &str =
    "Hello! I'm VidyaBot, the AI assistant for Vidya Mandir. How can I help you today?";

/// Onboarding quick-reply suggestions, shown until the first send.
pub const SUGGESTIONS: &[&str] = &["Programs", "Admissions", "Locations"];

/// A single chat session: the conversation store, the in-flight guard, and
/// the suggestion gate.
///
/// Turns are strictly serialized: [`ChatSession::send`] is a silent no-op
/// while a previous send is pending, so the session can never produce
/// consecutive user messages.
pub struct ChatSession {
    conversation: Conversation,
    backend: Arc<dyn ChatBackend>,
    in_flight: bool,
    suggestions_visible: bool,
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("len", &self.conversation.len())
            .field("in_flight", &self.in_flight)
            .field("suggestions_visible", &self.suggestions_visible)
            .finish_non_exhaustive()
    }
}

impl ChatSession {
    /// Create a session with the default greeting.
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self::with_greeting(backend, DEFAULT_GREETING)
    }

    /// Create a session with a custom greeting at index 0.
    pub fn with_greeting(backend: Arc<dyn ChatBackend>, greeting: impl Into<String>) -> Self {
        Self {
            conversation: Conversation::with_greeting(greeting),
            backend,
            in_flight: false,
            suggestions_visible: true,
        }
    }

    /// Dispatch one user turn.
    ///
    /// Silently does nothing when `text` is blank or a send is already in
    /// flight. Otherwise appends the user message, performs the exchange with
    /// the entire history (greeting and new message included), and appends
    /// the bot's reply. Any backend failure is converted into an apologetic
    /// bot message, so the conversation never shows a raw error. The
    /// in-flight flag is cleared unconditionally.
    #[instrument(skip_all, fields(text_len = text.len()))]
    pub async fn send(&mut self, text: &str) {
        if text.trim().is_empty() {
            debug!("Ignoring blank message");
            return;
        }
        if self.in_flight {
            debug!("Send already in flight, ignoring");
            return;
        }

        // First attempted send permanently hides the quick replies.
        self.suggestions_visible = false;
        self.conversation.push_user(text);
        self.in_flight = true;

        let history = self.conversation.messages().to_vec();
        match self.backend.send(&history, text).await {
            Ok(reply) => {
                self.conversation.push_bot(reply.text, reply.sources);
            }
            Err(e) => {
                warn!(error = %e.message, "Chat exchange failed");
                self.conversation.push_bot(
                    format!(
                        "Sorry, I couldn't connect to the server: {}. Please try again later.",
                        e.message
                    ),
                    Vec::new(),
                );
            }
        }
        self.in_flight = false;
    }

    /// The ordered message history, greeting included.
    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    /// True while an exchange is pending; the UI disables input affordances.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Quick-reply suggestions, or `None` once a send has been attempted.
    pub fn suggestions(&self) -> Option<&'static [&'static str]> {
        self.suggestions_visible.then_some(SUGGESTIONS)
    }
}
