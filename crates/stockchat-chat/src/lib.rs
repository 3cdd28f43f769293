//! Chat front end for the stockchat service
//!
//! Translates free-text questions into (symbol, intent) pairs, fetches the
//! collected record from the HTTP service, and rewrites it as prose. All of
//! the extraction here is lexical: a regex pass, a stop-word filter, and
//! keyword sets per intent.

pub mod client;
pub mod conversation;
pub mod error;
pub mod render;
pub mod router;

pub use client::ApiClient;
pub use conversation::ConversationManager;
pub use error::{ChatError, Result};
pub use router::{ChatIntent, QueryRouter};
