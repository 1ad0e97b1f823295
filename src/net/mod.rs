//! Networking for the chat endpoint.
//!
//! DESIGN
//! ======
//! `types` holds the wire format and the [`ChatBackend`] seam; `api` is the
//! reqwest implementation. The widget only ever sees the trait.

pub mod api;
pub mod types;

pub use api::HttpChatBackend;
pub use types::{ChatBackend, ChatError, ChatReply, ChatRequest};
