//! Sentiment fetch step

use crate::step::PipelineStep;
use async_trait::async_trait;
use std::sync::Arc;
use stockchat_core::{NewsProvider, Sentiment, SentimentScorer, Slot, StockState};
use tracing::warn;

/// Fills the sentiment slot by fetching news and scoring it
///
/// Composes two collaborators; a failure of either counts as a failure of the
/// whole step. The failure sentinel is a filled `{summary: "Error",
/// details: []}` value, not the `"unavailable"` marker the other steps use.
pub struct SentimentStep {
    news: Arc<dyn NewsProvider>,
    scorer: Arc<dyn SentimentScorer>,
}

impl SentimentStep {
    pub fn new(news: Arc<dyn NewsProvider>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { news, scorer }
    }
}

#[async_trait]
impl PipelineStep for SentimentStep {
    fn name(&self) -> &'static str {
        "sentiment"
    }

    async fn run(&self, state: &mut StockState) {
        let scored = match self.news.recent_articles(&state.symbol).await {
            Ok(articles) => self.scorer.score(&articles),
            Err(err) => Err(err),
        };

        match scored {
            Ok(sentiment) => state.sentiment = Slot::Value(sentiment),
            Err(err) => {
                warn!(symbol = %state.symbol, error = %err, "sentiment analysis failed");
                state.sentiment = Slot::Value(Sentiment::error());
            }
        }
    }
}
