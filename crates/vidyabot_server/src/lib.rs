//! HTTP proxy server for the VidyaBot chat widget.
//!
//! One synchronous exchange per user turn: the handler validates the payload,
//! translates the client history into upstream turns, invokes the model, and
//! relays the reply plus any cited sources. The proxy is stateless across
//! requests; shared state is the immutable configuration and the reusable
//! upstream client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod history;
mod response;
mod routes;

pub use config::{Environment, ServerConfig};
pub use history::translate_history;
pub use response::ApiError;
pub use routes::{AppState, router};
