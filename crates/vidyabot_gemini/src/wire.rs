//! Wire types for the Gemini `generateContent` REST API.
//!
//! Request types serialize to the shape the v1beta endpoint expects;
//! response types treat the payload as untrusted external data, so every
//! nested level is optional or defaulted and a missing level never fails
//! decoding.

use serde::{Deserialize, Serialize};
use vidyabot_core::{Turn, TurnRole};

//
// ─── REQUEST ────────────────────────────────────────────────────────────────────
//

/// Body of a `generateContent` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns, oldest first, ending with the new user turn
    pub contents: Vec<Content>,
    /// The fixed system instruction
    pub system_instruction: SystemInstruction,
    /// Sampling and output-length parameters
    pub generation_config: GenerationConfig,
    /// Enabled tools (web-search grounding)
    pub tools: Vec<Tool>,
}

/// One conversation turn in wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// `user` or `model`
    pub role: TurnRole,
    /// Turn content; the API splits text into parts
    pub parts: Vec<Part>,
}

impl From<&Turn> for Content {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role,
            parts: vec![Part {
                text: turn.text.clone(),
            }],
        }
    }
}

/// A single text part of a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// The part text
    pub text: String,
}

/// The system instruction preamble, roleless on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInstruction {
    /// Instruction text parts
    pub parts: Vec<Part>,
}

impl SystemInstruction {
    /// Wrap instruction text in the wire shape.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Generation parameters, fixed at client construction.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling cap
    pub top_p: f32,
    /// Top-k sampling cap
    pub top_k: u32,
    /// Output length cap in tokens
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 1024,
        }
    }
}

/// A tool made available to the model.
#[derive(Debug, Clone, Serialize)]
pub enum Tool {
    /// Web-search grounding, letting the model cite web sources
    #[serde(rename = "google_search")]
    GoogleSearch {},
}

//
// ─── RESPONSE ───────────────────────────────────────────────────────────────────
//

/// A `generateContent` completion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationResponse {
    /// Response candidates; the first carries the reply
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerationResponse {
    /// Concatenated text of the first candidate, empty when absent.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

/// A single response candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated content
    #[serde(default)]
    pub content: Option<CandidateContent>,
    /// Citation data when search grounding was used
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Content of a response candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    /// Generated parts in order
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// One generated part; non-text parts decode with `text: None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    /// Text payload, if this part carries text
    #[serde(default)]
    pub text: Option<String>,
}

/// Citation metadata linking a completion to the web sources it drew upon.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    /// Cited chunks in the order the model emitted them
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// One cited chunk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroundingChunk {
    /// Web citation, absent for non-web chunks
    #[serde(default)]
    pub web: Option<WebSource>,
}

/// A web citation inside a grounding chunk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebSource {
    /// Cited page URL
    #[serde(default)]
    pub uri: Option<String>,
    /// Cited page title
    #[serde(default)]
    pub title: Option<String>,
}

//
// ─── ERROR BODY ─────────────────────────────────────────────────────────────────
//

/// Structured error body returned by the API on failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    /// The error detail, when the body followed the documented shape
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
}

/// Detail of a structured API error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Canonical status string, e.g. `RESOURCE_EXHAUSTED`
    #[serde(default)]
    pub status: Option<String>,
}
