//! Alpha Vantage API client

use crate::config::DataConfig;
use crate::error::{DataError, Result};
use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use stockchat_core::Financials;

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Free-tier request budget, requests per minute
const DEFAULT_RATE_LIMIT: NonZeroU32 = match NonZeroU32::new(5) {
    Some(limit) => limit,
    None => panic!("default rate limit must be nonzero"),
};

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Alpha Vantage API client for quotes and fundamentals
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    rate_limiter: SharedRateLimiter,
}

impl AlphaVantageClient {
    /// Create a new Alpha Vantage client with API key and rate limit
    ///
    /// # Arguments
    /// * `api_key` - Alpha Vantage API key
    /// * `rate_limit` - Maximum requests per minute (default: 5 for free tier)
    pub fn new(api_key: impl Into<String>, rate_limit: u32) -> Self {
        let quota =
            Quota::per_minute(NonZeroU32::new(rate_limit).unwrap_or(DEFAULT_RATE_LIMIT));
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Self {
            client: Client::new(),
            api_key: api_key.into(),
            rate_limiter,
        }
    }

    /// Create a client from a [`DataConfig`], honoring its request timeout
    pub fn from_config(config: &DataConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let quota = Quota::per_minute(
            NonZeroU32::new(config.alpha_vantage_rate_limit).unwrap_or(DEFAULT_RATE_LIMIT),
        );

        Ok(Self {
            client,
            api_key: config.alpha_vantage_api_key.clone(),
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }

    /// Fetch the latest trade price for a symbol via `GLOBAL_QUOTE`
    pub async fn global_quote(&self, symbol: &str) -> Result<f64> {
        let data = self.query("GLOBAL_QUOTE", symbol).await?;
        parse_global_quote(symbol, &data)
    }

    /// Fetch fundamental metrics for a symbol via `OVERVIEW`
    pub async fn company_overview(&self, symbol: &str) -> Result<Financials> {
        let data = self.query("OVERVIEW", symbol).await?;
        parse_overview(symbol, &data)
    }

    /// Issue one rate-limited query and pre-check the payload for API errors
    async fn query(&self, function: &str, symbol: &str) -> Result<Value> {
        tracing::debug!("Querying Alpha Vantage {} for {}", function, symbol);
        self.rate_limiter.until_ready().await;

        let mut params = HashMap::new();
        params.insert("function", function);
        params.insert("symbol", symbol);
        params.insert("apikey", &self.api_key);

        let response = self.client.get(BASE_URL).query(&params).send().await?;

        if !response.status().is_success() {
            tracing::warn!(
                "Alpha Vantage HTTP error for {}: {}",
                symbol,
                response.status()
            );
            return Err(DataError::Api(format!(
                "Alpha Vantage HTTP error: {}",
                response.status()
            )));
        }

        let data: Value = response.json().await?;
        if let Err(err) = check_api_errors(&data) {
            tracing::warn!("Alpha Vantage rejected {} for {}: {}", function, symbol, err);
            return Err(err);
        }
        Ok(data)
    }
}

/// Reject payloads carrying Alpha Vantage's in-band error markers
fn check_api_errors(data: &Value) -> Result<()> {
    if let Some(error) = data.get("Error Message") {
        return Err(DataError::Api(error.to_string()));
    }

    // A "Note" payload means the free-tier quota is exhausted
    if data.get("Note").is_some() {
        return Err(DataError::RateLimitExceeded {
            provider: "Alpha Vantage".to_string(),
        });
    }

    Ok(())
}

/// Pull the price out of a `GLOBAL_QUOTE` payload
fn parse_global_quote(symbol: &str, data: &Value) -> Result<f64> {
    data.get("Global Quote")
        .and_then(|quote| quote.get("05. price"))
        .and_then(Value::as_str)
        .and_then(|raw| raw.parse::<f64>().ok())
        .ok_or_else(|| DataError::DataUnavailable {
            symbol: symbol.to_string(),
            reason: "no quote data in response".to_string(),
        })
}

/// Pull the fundamental metrics out of an `OVERVIEW` payload
///
/// Figures are kept in Alpha Vantage's string form; only presence is checked
/// here.
fn parse_overview(symbol: &str, data: &Value) -> Result<Financials> {
    let field = |key: &str| data.get(key).and_then(Value::as_str).map(str::to_string);

    match (
        field("MarketCapitalization"),
        field("RevenueTTM"),
        field("EBITDA"),
    ) {
        (Some(market_cap), Some(revenue), Some(earnings)) => Ok(Financials {
            market_cap,
            revenue,
            earnings,
        }),
        _ => Err(DataError::DataUnavailable {
            symbol: symbol.to_string(),
            reason: "no overview data in response".to_string(),
        }),
    }
}

#[async_trait]
impl stockchat_core::QuoteProvider for AlphaVantageClient {
    async fn latest_price(&self, symbol: &str) -> stockchat_core::Result<f64> {
        self.global_quote(symbol).await.map_err(Into::into)
    }
}

#[async_trait]
impl stockchat_core::FundamentalsProvider for AlphaVantageClient {
    async fn fundamentals(&self, symbol: &str) -> stockchat_core::Result<Financials> {
        self.company_overview(symbol).await.map_err(Into::into)
    }
}
