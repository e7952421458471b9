//! Error types for the VidyaBot chat service.
//!
//! This crate provides the foundation error types used throughout the
//! VidyaBot workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vidyabot_error::{VidyabotResult, HttpError};
//!
//! fn fetch_data() -> VidyabotResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod http;
mod server;

pub use config::ConfigError;
pub use error::{VidyabotError, VidyabotErrorKind, VidyabotResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::HttpError;
pub use server::{ServerError, ServerErrorKind};
