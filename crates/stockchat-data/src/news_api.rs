//! NewsAPI client for recent company headlines

use crate::config::DataConfig;
use crate::error::{DataError, Result};
use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde_json::Value;
use std::num::NonZeroU32;
use std::sync::Arc;
use stockchat_core::Article;

const BASE_URL: &str = "https://newsapi.org/v2/everything";

/// Request budget per minute when none is configured
const DEFAULT_RATE_LIMIT: NonZeroU32 = match NonZeroU32::new(60) {
    Some(limit) => limit,
    None => panic!("default rate limit must be nonzero"),
};

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// NewsAPI client for company news
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    max_articles: usize,
    rate_limiter: SharedRateLimiter,
}

impl NewsApiClient {
    /// Create a new NewsAPI client with rate limiting
    ///
    /// # Arguments
    /// * `api_key` - NewsAPI key
    /// * `rate_limit` - Requests per minute
    pub fn new(api_key: impl Into<String>, rate_limit: u32) -> Self {
        let quota =
            Quota::per_minute(NonZeroU32::new(rate_limit).unwrap_or(DEFAULT_RATE_LIMIT));
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Self {
            client: Client::new(),
            api_key: api_key.into(),
            max_articles: 5,
            rate_limiter,
        }
    }

    /// Create a client from a [`DataConfig`], honoring timeout and page size
    pub fn from_config(config: &DataConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let quota = Quota::per_minute(
            NonZeroU32::new(config.news_rate_limit).unwrap_or(DEFAULT_RATE_LIMIT),
        );

        Ok(Self {
            client,
            api_key: config.news_api_key.clone(),
            max_articles: config.max_articles,
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }

    /// Fetch recent articles mentioning a symbol
    pub async fn company_news(&self, symbol: &str) -> Result<Vec<Article>> {
        let query = query_for_symbol(symbol);
        tracing::debug!("Fetching news for {} (query: {})", symbol, query);
        self.rate_limiter.until_ready().await;

        let page_size = self.max_articles.to_string();
        let params = [
            ("q", query),
            ("apiKey", self.api_key.as_str()),
            ("language", "en"),
            ("sortBy", "publishedAt"),
            ("pageSize", page_size.as_str()),
        ];

        let response = self.client.get(BASE_URL).query(&params).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("NewsAPI HTTP error for {}: {}", symbol, status);
            return Err(DataError::Api(format!("NewsAPI error {status}: {body}")));
        }

        let data: Value = response.json().await?;
        parse_everything_response(symbol, &data)
    }
}

/// Search query for a symbol
///
/// Headlines rarely spell out the ticker, so the best-known symbols map to
/// their company name and everything else is searched verbatim.
fn query_for_symbol(symbol: &str) -> &str {
    match symbol {
        "AAPL" => "Apple",
        "TSLA" => "Tesla",
        "MSFT" => "Microsoft",
        "GOOGL" => "Google",
        "AMZN" => "Amazon",
        "IBM" => "IBM",
        other => other,
    }
}

/// Map an `/everything` payload to articles
fn parse_everything_response(symbol: &str, data: &Value) -> Result<Vec<Article>> {
    if data.get("status").and_then(Value::as_str) != Some("ok") {
        return Err(DataError::DataUnavailable {
            symbol: symbol.to_string(),
            reason: data
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("news lookup failed")
                .to_string(),
        });
    }

    let articles = data
        .get("articles")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| Article {
                    title: item
                        .get("title")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    description: item
                        .get("description")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(articles)
}

#[async_trait]
impl stockchat_core::NewsProvider for NewsApiClient {
    async fn recent_articles(&self, symbol: &str) -> stockchat_core::Result<Vec<Article>> {
        self.company_news(symbol).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = NewsApiClient::new("test_key", 60);
        assert_eq!(client.api_key, "test_key");
        assert_eq!(client.max_articles, 5);
    }

    #[test]
    fn test_query_mapping() {
        assert_eq!(query_for_symbol("AAPL"), "Apple");
        assert_eq!(query_for_symbol("TSLA"), "Tesla");
        // Unmapped symbols are searched verbatim
        assert_eq!(query_for_symbol("NVDA"), "NVDA");
    }

    #[test]
    fn test_parse_ok_response() {
        let data = json!({
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {"title": "Apple unveils new chip", "description": "Faster and cooler"},
                {"title": "Apple earnings ahead", "description": null}
            ]
        });

        let articles = parse_everything_response("AAPL", &data).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Apple unveils new chip");
        // Missing descriptions collapse to empty strings
        assert_eq!(articles[1].description, "");
    }

    #[test]
    fn test_parse_error_response() {
        let data = json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid."
        });

        let result = parse_everything_response("AAPL", &data);
        match result {
            Err(DataError::DataUnavailable { reason, .. }) => {
                assert_eq!(reason, "Your API key is invalid.");
            }
            other => panic!("expected DataUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_ok_response_without_articles() {
        let data = json!({"status": "ok", "totalResults": 0});
        let articles = parse_everything_response("ZZZZ", &data).unwrap();
        assert!(articles.is_empty());
    }

    #[tokio::test]
    #[ignore] // Requires API key and network access
    async fn test_live_company_news() {
        let config = DataConfig::from_env().unwrap();
        let client = NewsApiClient::from_config(&config).unwrap();
        let articles = client.company_news("AAPL").await.unwrap();
        assert!(!articles.is_empty());
    }
}
