//! Core data types for the VidyaBot chat service.
//!
//! This crate provides the conversation data model shared by the client
//! library and the proxy server.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod conversation;
mod message;
mod reply;
mod sender;
mod source;
mod turn;

pub use conversation::{Conversation, GREETING_ID};
pub use message::Message;
pub use reply::ChatReply;
pub use sender::Sender;
pub use source::Source;
pub use turn::{Turn, TurnRole};
