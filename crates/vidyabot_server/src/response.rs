//! Error-to-status mapping for API responses.
//!
//! Every failure is caught at the handler boundary and rendered as a JSON
//! body with at least an `error` string. Key-related upstream detail never
//! reaches callers; raw detail is attached only outside production mode.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::error;
use vidyabot_error::GeminiError;

const AUTH_MESSAGE: &str = "Authentication error with the AI service. Please contact support.";
const QUOTA_MESSAGE: &str =
    "The AI service is temporarily unavailable due to high demand. Please try again shortly.";
const UPSTREAM_MESSAGE: &str = "AI service is currently unavailable.";
const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred.";

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    received: Option<Value>,
}

/// A classified request failure, ready to render.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    details: Option<String>,
    received: Option<Value>,
}

impl ApiError {
    /// Malformed client input: 400 naming the offending field, echoing what
    /// was received.
    pub fn validation(message: impl Into<String>, received: Value) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: message.into(),
            details: None,
            received: Some(received),
        }
    }

    /// An upstream failure, mapped per the classification contract.
    ///
    /// The raw error is logged in full server-side regardless of mode.
    pub fn upstream(err: GeminiError, expose_details: bool) -> Self {
        error!(error = %err, "Upstream Gemini call failed");
        let kind = &err.kind;
        if kind.is_authentication() {
            // Never leak key-related detail to callers.
            return Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: AUTH_MESSAGE.to_string(),
                details: None,
                received: None,
            };
        }
        if kind.is_quota() {
            return Self {
                status: StatusCode::TOO_MANY_REQUESTS,
                error: QUOTA_MESSAGE.to_string(),
                details: None,
                received: None,
            };
        }
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: UPSTREAM_MESSAGE.to_string(),
            details: expose_details.then(|| err.to_string()),
            received: None,
        }
    }

    /// Any other handler failure: 500 with a generic message.
    pub fn unexpected(detail: impl Into<String>, expose_details: bool) -> Self {
        let detail = detail.into();
        error!(error = %detail, "Unexpected request handler failure");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: UNEXPECTED_MESSAGE.to_string(),
            details: expose_details.then_some(detail),
            received: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.error,
            details: self.details,
            received: self.received,
        };
        (self.status, Json(body)).into_response()
    }
}
