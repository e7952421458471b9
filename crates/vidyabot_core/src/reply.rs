//! Reply types returned by the proxy.

use crate::Source;
use serde::{Deserialize, Serialize};

/// A successful reply from the proxy: the completion text plus any cited
/// sources. This is the 200 body of `POST /api/chat`.
///
/// # Examples
///
/// ```
/// use vidyabot_core::ChatReply;
///
/// let reply = ChatReply {
///     text: "Admissions open in spring.".to_string(),
///     sources: Vec::new(),
/// };
///
/// assert!(reply.sources.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    /// The assistant's reply text, never empty
    pub text: String,
    /// Deduplicated cited sources in first-seen order
    #[serde(default)]
    pub sources: Vec<Source>,
}
