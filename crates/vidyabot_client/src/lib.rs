//! Conversation store and message dispatcher for the VidyaBot chat widget.
//!
//! A front end embeds [`ChatSession`] to hold the ordered message history and
//! to dispatch user turns to the proxy. The session serializes turns with an
//! in-flight guard and never surfaces a raw error: any transport failure
//! becomes an apologetic bot message in the conversation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod session;
mod transport;

pub use session::{ChatSession, DEFAULT_GREETING, SUGGESTIONS};
pub use transport::{ChatBackend, HttpBackend};
