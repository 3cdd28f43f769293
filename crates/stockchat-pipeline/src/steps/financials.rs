//! Financials fetch step

use crate::step::PipelineStep;
use async_trait::async_trait;
use std::sync::Arc;
use stockchat_core::{FundamentalsProvider, Slot, StockState};
use tracing::warn;

/// Fills the financials slot from a [`FundamentalsProvider`]
pub struct FinancialsStep {
    fundamentals: Arc<dyn FundamentalsProvider>,
}

impl FinancialsStep {
    pub fn new(fundamentals: Arc<dyn FundamentalsProvider>) -> Self {
        Self { fundamentals }
    }
}

#[async_trait]
impl PipelineStep for FinancialsStep {
    fn name(&self) -> &'static str {
        "financials"
    }

    async fn run(&self, state: &mut StockState) {
        match self.fundamentals.fundamentals(&state.symbol).await {
            Ok(financials) => state.financials = Slot::Value(financials),
            Err(err) => {
                warn!(symbol = %state.symbol, error = %err, "fundamentals lookup failed");
                state.financials = Slot::Unavailable;
            }
        }
    }
}
