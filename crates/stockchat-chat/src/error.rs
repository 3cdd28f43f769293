//! Error types for the chat front end

use thiserror::Error;

/// Result type alias for chat operations
pub type Result<T> = std::result::Result<T, ChatError>;

#[derive(Debug, Error)]
pub enum ChatError {
    /// The service answered with an error status
    #[error("service error {status}: {message}")]
    Api { status: u16, message: String },

    /// Network or HTTP error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
