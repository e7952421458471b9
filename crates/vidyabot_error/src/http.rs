//! HTTP error types.

/// Transport failure between the chat widget and the proxy, with source
/// location.
///
/// The dispatcher folds the `message` into the apologetic bot reply it shows
/// on a failed exchange, so it should stay short and presentable.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vidyabot_error::HttpError;
    ///
    /// let err = HttpError::new("Server responded with status: 503");
    /// assert!(err.message.contains("503"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
