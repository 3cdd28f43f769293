//! Sequential collection pipeline for stockchat
//!
//! The pipeline drives a [`stockchat_core::StockState`] through its
//! lifecycle: an initial [`coordinator::advance`] moves it to `in_progress`,
//! the three fetch steps fill one slot each (price, then financials, then
//! sentiment), and a final `advance` observes whether every slot is occupied
//! and marks the run `complete`.
//!
//! Steps are infallible by contract: each converts its collaborator's failure
//! into the slot's sentinel and never propagates an error. Completion is
//! defined purely by slot occupancy, so a run over a symbol no provider knows
//! still completes - with sentinels in every slot.

pub mod coordinator;
pub mod pipeline;
pub mod step;
pub mod steps;

pub use pipeline::{Pipeline, PipelineBuilder};
pub use step::PipelineStep;
pub use steps::{FinancialsStep, PriceStep, SentimentStep};
