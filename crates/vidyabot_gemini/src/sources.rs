//! Grounding-metadata decoding.
//!
//! The grounding walk treats the nested response structure as untrusted
//! external data: every missing level yields "no sources" rather than an
//! error, so source extraction can never fail the overall reply.

use crate::wire::GenerationResponse;
use std::collections::HashSet;
use vidyabot_core::Source;

/// Extract the deduplicated citation list from a completion.
///
/// Descends into `candidates[0].groundingMetadata.groundingChunks[*].web`.
/// Chunks lacking both `uri` and `title` are dropped; duplicates (equal
/// `uri`) keep the first occurrence's title. Output preserves first-seen
/// order, and the function is pure: calling it twice on the same response
/// yields the same list.
///
/// # Examples
///
/// ```
/// use vidyabot_gemini::{GenerationResponse, extract_sources};
///
/// let response = GenerationResponse::default();
/// assert!(extract_sources(&response).is_empty());
/// ```
pub fn extract_sources(response: &GenerationResponse) -> Vec<Source> {
    let chunks = response
        .candidates
        .first()
        .and_then(|c| c.grounding_metadata.as_ref())
        .map(|metadata| metadata.grounding_chunks.as_slice())
        .unwrap_or_default();

    let mut seen = HashSet::new();
    let mut sources = Vec::new();

    for chunk in chunks {
        let Some(web) = chunk.web.as_ref() else {
            continue;
        };
        if web.uri.is_none() && web.title.is_none() {
            continue;
        }
        let uri = web.uri.clone().unwrap_or_default();
        if seen.insert(uri.clone()) {
            sources.push(Source {
                uri,
                title: web.title.clone().unwrap_or_default(),
            });
        }
    }

    sources
}
