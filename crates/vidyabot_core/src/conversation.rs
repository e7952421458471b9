//! In-memory conversation store.

use crate::{Message, Sender, Source};

/// Identifier reserved for the synthetic greeting at index 0.
pub const GREETING_ID: &str = "init";

/// Ordered, session-scoped store of exchanged messages.
///
/// Index 0 is a synthetic bot greeting that is never sent upstream. The
/// store is append-only: messages are immutable once created and are lost
/// when the session ends (no persistence layer).
///
/// # Examples
///
/// ```
/// use vidyabot_core::{Conversation, Sender};
///
/// let mut conversation = Conversation::with_greeting("Hello! How can I help?");
/// conversation.push_user("Admissions");
///
/// assert_eq!(conversation.len(), 2);
/// assert_eq!(conversation.messages()[0].sender, Sender::Bot);
/// assert_eq!(conversation.messages()[1].text, "Admissions");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
    next_id: u64,
}

impl Conversation {
    /// Create a conversation seeded with the synthetic bot greeting.
    pub fn with_greeting(text: impl Into<String>) -> Self {
        Self {
            messages: vec![Message {
                id: GREETING_ID.to_string(),
                text: text.into(),
                sender: Sender::Bot,
                sources: Vec::new(),
            }],
            next_id: 1,
        }
    }

    /// Append a user message and return a reference to it.
    pub fn push_user(&mut self, text: impl Into<String>) -> &Message {
        self.push(text.into(), Sender::User, Vec::new())
    }

    /// Append a bot message, optionally carrying cited sources.
    pub fn push_bot(&mut self, text: impl Into<String>, sources: Vec<Source>) -> &Message {
        self.push(text.into(), Sender::Bot, sources)
    }

    fn push(&mut self, text: String, sender: Sender, sources: Vec<Source>) -> &Message {
        let id = self.next_id.to_string();
        self.next_id += 1;
        self.messages.push(Message {
            id,
            text,
            sender,
            sources,
        });
        self.messages.last().expect("just pushed")
    }

    /// The full ordered message history, greeting included.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recently appended message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages in the conversation, greeting included.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when the store holds no messages.
    ///
    /// A conversation created through [`Conversation::with_greeting`] is
    /// never empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
