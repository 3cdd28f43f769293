//! Shared application state

use std::sync::Arc;
use stockchat_data::{AlphaVantageClient, DataConfig, LexiconScorer, NewsApiClient};
use stockchat_pipeline::Pipeline;

/// State handed to every request handler
///
/// Holds the one shared (stateless) pipeline; every request runs it against
/// its own fresh `StockState`, so nothing mutable is shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    /// Wire the standard pipeline from provider configuration
    pub fn from_config(config: &DataConfig) -> stockchat_data::Result<Self> {
        let alpha = Arc::new(AlphaVantageClient::from_config(config)?);
        let news = Arc::new(NewsApiClient::from_config(config)?);
        let scorer = Arc::new(LexiconScorer::new());

        let pipeline = Pipeline::standard(Arc::clone(&alpha), alpha, news, scorer);

        Ok(Self {
            pipeline: Arc::new(pipeline),
        })
    }

    /// Build state around an already-constructed pipeline
    pub fn with_pipeline(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}
