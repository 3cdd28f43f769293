//! Core abstractions for the stockchat pipeline
//!
//! This crate defines the domain types shared across the stockchat workspace:
//!
//! - [`StockState`]: the per-request record the pipeline fills in
//! - [`Slot`]: a three-state data slot distinguishing "not yet attempted",
//!   "tried and failed", and "holds data"
//! - [`PipelineStatus`]: the collection lifecycle with its transition table
//! - Provider traits ([`QuoteProvider`], [`FundamentalsProvider`],
//!   [`NewsProvider`], [`SentimentScorer`]) that the data crate implements
//!   and the pipeline steps consume

pub mod error;
pub mod provider;
pub mod state;

pub use error::{Error, Result};
pub use provider::{FundamentalsProvider, NewsProvider, QuoteProvider, SentimentScorer};
pub use state::{
    Article, ArticleSentiment, Financials, PipelineStatus, Sentiment, SentimentLabel,
    SentimentSummary, Slot, StockState,
};
