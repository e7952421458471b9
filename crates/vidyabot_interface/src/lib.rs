//! Trait definitions for the VidyaBot chat service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::ChatModel;
