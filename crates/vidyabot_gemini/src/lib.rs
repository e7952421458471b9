//! Google Gemini client for the VidyaBot proxy.
//!
//! This crate implements the single upstream exchange the proxy performs per
//! user turn: one synchronous `generateContent` call carrying the translated
//! history, the new message, the fixed VidyaBot system instruction, and the
//! `google_search` grounding tool. Grounding metadata in the reply is decoded
//! into a deduplicated source list.
//!
//! No retries and no streaming: a failed call propagates a classified
//! [`vidyabot_error::GeminiError`] to the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod prompt;
mod sources;
mod wire;

pub use client::{DEFAULT_MODEL, GeminiClient, classify_failure};
pub use prompt::{FALLBACK_REPLY, SYSTEM_INSTRUCTION};
pub use sources::extract_sources;
pub use wire::{
    Candidate, CandidateContent, Content, GenerationConfig, GenerationResponse, GroundingChunk,
    GroundingMetadata, Part, ResponsePart, WebSource,
};
