//! Error types for data provider operations

use thiserror::Error;

/// Provider-specific errors
#[derive(Debug, Error)]
pub enum DataError {
    /// API request failed
    #[error("API error: {0}")]
    Api(String),

    /// Invalid stock symbol provided
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Data not available for the requested symbol
    #[error("Data not available for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },

    /// Rate limit exceeded for API
    #[error("Rate limit exceeded for {provider}")]
    RateLimitExceeded { provider: String },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Convert DataError into the domain error the provider traits speak
impl From<DataError> for stockchat_core::Error {
    fn from(err: DataError) -> Self {
        match err {
            DataError::DataUnavailable { symbol, reason } => {
                stockchat_core::Error::DataUnavailable { symbol, reason }
            }
            DataError::InvalidSymbol(symbol) => stockchat_core::Error::DataUnavailable {
                symbol,
                reason: "unknown symbol".to_string(),
            },
            DataError::Config(msg) => stockchat_core::Error::Config(msg),
            other => stockchat_core::Error::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::DataUnavailable {
            symbol: "ZZZZ".to_string(),
            reason: "no quote data".to_string(),
        };
        assert_eq!(err.to_string(), "Data not available for ZZZZ: no quote data");
    }

    #[test]
    fn test_domain_conversion_keeps_unavailable() {
        let err = DataError::DataUnavailable {
            symbol: "ZZZZ".to_string(),
            reason: "no quote data".to_string(),
        };
        match stockchat_core::Error::from(err) {
            stockchat_core::Error::DataUnavailable { symbol, .. } => assert_eq!(symbol, "ZZZZ"),
            other => panic!("expected DataUnavailable, got {other:?}"),
        }
    }
}
