//! Collaborator contracts consumed by the pipeline steps
//!
//! Each fetch step talks to exactly one of these traits (the sentiment step
//! composes two). Implementations live in `stockchat-data`; the pipeline
//! crate only ever sees trait objects, so every run is independently testable
//! with mocked providers and nothing is a process-wide singleton.

use crate::error::Result;
use crate::state::{Article, Financials, Sentiment};
use async_trait::async_trait;

/// Latest-price lookup keyed by ticker symbol
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the most recent trade price for `symbol`
    ///
    /// Fails with a domain error when the provider has no data for the
    /// symbol.
    async fn latest_price(&self, symbol: &str) -> Result<f64>;
}

/// Fundamental-metrics lookup keyed by ticker symbol
#[async_trait]
pub trait FundamentalsProvider: Send + Sync {
    /// Fetch market cap, revenue, and earnings for `symbol`
    async fn fundamentals(&self, symbol: &str) -> Result<Financials>;
}

/// Recent-news lookup keyed by ticker symbol
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch recent articles mentioning `symbol`
    async fn recent_articles(&self, symbol: &str) -> Result<Vec<Article>>;
}

/// Sentiment scoring over a batch of articles
///
/// On an empty batch, implementations return the "No articles found" verdict
/// rather than an error.
pub trait SentimentScorer: Send + Sync {
    /// Score each article and aggregate a summary verdict
    fn score(&self, articles: &[Article]) -> Result<Sentiment>;
}
