//! Sender types for conversation participants.

use serde::{Deserialize, Serialize};

/// Who contributed a message to the conversation.
///
/// Serialized lowercase (`"user"` / `"bot"`) to match the chat wire format.
///
/// # Examples
///
/// ```
/// use vidyabot_core::Sender;
///
/// assert_ne!(Sender::User, Sender::Bot);
/// assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
///
/// // Display implementation
/// assert_eq!(format!("{}", Sender::User), "User");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Messages typed by the human
    User,
    /// Messages produced by the assistant
    Bot,
}
