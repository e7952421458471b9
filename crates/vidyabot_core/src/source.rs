//! Citation source types.

use serde::{Deserialize, Serialize};

/// A web source the assistant cited for a reply.
///
/// Two sources are considered duplicates iff their `uri` values are equal;
/// the title plays no part in deduplication.
///
/// # Examples
///
/// ```
/// use vidyabot_core::Source;
///
/// let source = Source {
///     uri: "https://www.vidyamandir.org".to_string(),
///     title: "Vidya Mandir".to_string(),
/// };
///
/// assert!(source.uri.starts_with("https://"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Absolute URL of the cited page
    pub uri: String,
    /// Display title for the citation
    pub title: String,
}
