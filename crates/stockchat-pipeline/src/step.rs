//! Fetch step contract

use async_trait::async_trait;
use stockchat_core::StockState;

/// One slot-filling step of the collection pipeline
///
/// A step reads `state.symbol`, calls its collaborator, and writes its slot.
/// Steps never fail past their own boundary: a retrieval failure becomes the
/// slot's sentinel, so after `run` returns the slot is always occupied.
#[async_trait]
pub trait PipelineStep: Send + Sync {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Populate this step's slot on `state`
    async fn run(&self, state: &mut StockState);
}
