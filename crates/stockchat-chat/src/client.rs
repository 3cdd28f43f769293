//! Thin client for the stockchat HTTP service

use crate::error::{ChatError, Result};
use reqwest::Client;
use std::time::Duration;
use stockchat_core::StockState;

/// How long one service call may take end to end
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the service boundary
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against a service base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Fetch the collected record for a symbol
    pub async fn get_stock(&self, symbol: &str) -> Result<StockState> {
        let url = format!("{}/stock/{}", self.base_url, symbol);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ChatError::Api { status, message });
        }

        Ok(response.json().await?)
    }
}
