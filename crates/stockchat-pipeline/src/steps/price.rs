//! Price fetch step

use crate::step::PipelineStep;
use async_trait::async_trait;
use std::sync::Arc;
use stockchat_core::{QuoteProvider, Slot, StockState};
use tracing::warn;

/// Fills the price slot from a [`QuoteProvider`]
pub struct PriceStep {
    quotes: Arc<dyn QuoteProvider>,
}

impl PriceStep {
    pub fn new(quotes: Arc<dyn QuoteProvider>) -> Self {
        Self { quotes }
    }
}

#[async_trait]
impl PipelineStep for PriceStep {
    fn name(&self) -> &'static str {
        "price"
    }

    async fn run(&self, state: &mut StockState) {
        match self.quotes.latest_price(&state.symbol).await {
            Ok(price) => state.price = Slot::Value(price),
            Err(err) => {
                warn!(symbol = %state.symbol, error = %err, "price lookup failed");
                state.price = Slot::Unavailable;
            }
        }
    }
}
