//! Configuration for the data providers

use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the data provider clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Alpha Vantage API key
    pub alpha_vantage_api_key: String,

    /// NewsAPI key
    pub news_api_key: String,

    /// Alpha Vantage requests per minute (free tier: 5)
    pub alpha_vantage_rate_limit: u32,

    /// NewsAPI requests per minute
    pub news_rate_limit: u32,

    /// Maximum articles to fetch per symbol
    pub max_articles: usize,

    /// Request timeout duration
    pub request_timeout: Duration,
}

impl DataConfig {
    /// Create a new configuration builder
    pub fn builder() -> DataConfigBuilder {
        DataConfigBuilder::default()
    }

    /// Load both API keys from the environment
    ///
    /// Reads `ALPHA_VANTAGE_API_KEY` and `NEWS_API_KEY`; everything else
    /// takes its default.
    pub fn from_env() -> Result<Self> {
        let alpha_vantage_api_key = std::env::var("ALPHA_VANTAGE_API_KEY").map_err(|_| {
            DataError::Config("ALPHA_VANTAGE_API_KEY environment variable not set".to_string())
        })?;
        let news_api_key = std::env::var("NEWS_API_KEY").map_err(|_| {
            DataError::Config("NEWS_API_KEY environment variable not set".to_string())
        })?;

        Self::builder()
            .alpha_vantage_api_key(alpha_vantage_api_key)
            .news_api_key(news_api_key)
            .build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.alpha_vantage_api_key.is_empty() {
            return Err(DataError::Config(
                "Alpha Vantage API key must not be empty".to_string(),
            ));
        }
        if self.news_api_key.is_empty() {
            return Err(DataError::Config(
                "NewsAPI key must not be empty".to_string(),
            ));
        }
        if self.max_articles == 0 {
            return Err(DataError::Config(
                "max_articles must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for DataConfig
#[derive(Debug, Default)]
pub struct DataConfigBuilder {
    alpha_vantage_api_key: Option<String>,
    news_api_key: Option<String>,
    alpha_vantage_rate_limit: Option<u32>,
    news_rate_limit: Option<u32>,
    max_articles: Option<usize>,
    request_timeout: Option<Duration>,
}

impl DataConfigBuilder {
    /// Set the Alpha Vantage API key
    pub fn alpha_vantage_api_key(mut self, key: impl Into<String>) -> Self {
        self.alpha_vantage_api_key = Some(key.into());
        self
    }

    /// Set the NewsAPI key
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Set the Alpha Vantage rate limit (requests per minute)
    pub fn alpha_vantage_rate_limit(mut self, limit: u32) -> Self {
        self.alpha_vantage_rate_limit = Some(limit);
        self
    }

    /// Set the NewsAPI rate limit (requests per minute)
    pub fn news_rate_limit(mut self, limit: u32) -> Self {
        self.news_rate_limit = Some(limit);
        self
    }

    /// Set the maximum number of articles to fetch per symbol
    pub fn max_articles(mut self, max: usize) -> Self {
        self.max_articles = Some(max);
        self
    }

    /// Set the request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<DataConfig> {
        let config = DataConfig {
            alpha_vantage_api_key: self.alpha_vantage_api_key.unwrap_or_default(),
            news_api_key: self.news_api_key.unwrap_or_default(),
            alpha_vantage_rate_limit: self.alpha_vantage_rate_limit.unwrap_or(5),
            news_rate_limit: self.news_rate_limit.unwrap_or(60),
            max_articles: self.max_articles.unwrap_or(5),
            request_timeout: self.request_timeout.unwrap_or(Duration::from_secs(30)),
        };

        config.validate()?;
        Ok(config)
    }
}
