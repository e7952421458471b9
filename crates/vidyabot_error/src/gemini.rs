//! Gemini-specific error types and failure categories.

/// Gemini-specific error conditions.
///
/// The variants double as the failure taxonomy the proxy maps to HTTP
/// statuses: authentication problems stay generic toward callers, quota
/// exhaustion is retryable by the caller, everything else is a generic
/// upstream failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// Upstream rejected the API key or credentials
    #[display("Gemini authentication failed: {}", _0)]
    Authentication(String),
    /// Upstream quota or rate limit exhausted
    #[display("Gemini quota exhausted: {}", _0)]
    QuotaExhausted(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Transport-level failure before a response arrived
    #[display("Gemini transport error: {}", _0)]
    Transport(String),
    /// Response body could not be decoded
    #[display("Invalid Gemini response: {}", _0)]
    InvalidResponse(String),
}

impl GeminiErrorKind {
    /// Check whether this error is an authentication/key problem.
    ///
    /// Used by the proxy to substitute a generic message so key-related
    /// detail never reaches callers.
    pub fn is_authentication(&self) -> bool {
        matches!(self, GeminiErrorKind::Authentication(_))
    }

    /// Check whether this error is quota/capacity exhaustion.
    ///
    /// Quota errors are surfaced as 429 and are retryable by the caller;
    /// the proxy itself never retries.
    pub fn is_quota(&self) -> bool {
        matches!(self, GeminiErrorKind::QuotaExhausted(_))
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use vidyabot_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::QuotaExhausted("quota exceeded".into()));
/// assert!(format!("{}", err).contains("quota exhausted"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
