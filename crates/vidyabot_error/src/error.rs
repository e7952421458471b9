//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, HttpError, ServerError};

/// This is the foundation error enum for the VidyaBot workspace.
///
/// # Examples
///
/// ```
/// use vidyabot_error::{VidyabotError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: VidyabotError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VidyabotErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini upstream error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Proxy server error
    #[from(ServerError)]
    Server(ServerError),
}

/// VidyaBot error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vidyabot_error::{VidyabotResult, ConfigError};
///
/// fn might_fail() -> VidyabotResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("VidyaBot Error: {}", _0)]
pub struct VidyabotError(Box<VidyabotErrorKind>);

impl VidyabotError {
    /// Create a new error from a kind.
    pub fn new(kind: VidyabotErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VidyabotErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VidyabotErrorKind
impl<T> From<T> for VidyabotError
where
    T: Into<VidyabotErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for VidyaBot operations.
///
/// # Examples
///
/// ```
/// use vidyabot_error::{VidyabotResult, HttpError};
///
/// fn fetch_data() -> VidyabotResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type VidyabotResult<T> = std::result::Result<T, VidyabotError>;
