//! Message types for conversation history.

use crate::{Sender, Source};
use serde::{Deserialize, Serialize};

/// A single turn in a conversation.
///
/// Identifiers are unique within a session and monotonically increasing by
/// creation time; they exist for rendering identity only. Array position in
/// the conversation is the authoritative order. Messages are immutable once
/// created and are never deleted.
///
/// # Examples
///
/// ```
/// use vidyabot_core::{Message, Sender};
///
/// let message = Message {
///     id: "1".to_string(),
///     text: "Hello!".to_string(),
///     sender: Sender::User,
///     sources: Vec::new(),
/// };
///
/// assert_eq!(message.sender, Sender::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Opaque identifier, unique within the session
    pub id: String,
    /// The message text
    pub text: String,
    /// Who contributed this message
    pub sender: Sender,
    /// Cited web sources, present only on grounded bot replies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}
