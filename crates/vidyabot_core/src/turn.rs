//! Upstream turn types.

use serde::{Deserialize, Serialize};

/// Role of a turn as the upstream API understands it.
///
/// Derived from [`crate::Sender`] by mapping `user → user` and anything
/// else → `model`.
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
pub enum TurnRole {
    /// A turn contributed by the human
    User,
    /// A turn contributed by the model
    Model,
}

/// One turn of translated history, ready to send upstream.
///
/// # Examples
///
/// ```
/// use vidyabot_core::{Turn, TurnRole};
///
/// let turn = Turn::new(TurnRole::User, "What are the school timings?");
/// assert_eq!(turn.role, TurnRole::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Who contributed the turn
    pub role: TurnRole,
    /// The turn text, non-empty after trimming
    pub text: String,
}

impl Turn {
    /// Create a new turn.
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}
