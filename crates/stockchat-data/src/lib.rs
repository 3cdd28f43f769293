//! Data providers for the stockchat pipeline
//!
//! Implements the `stockchat-core` provider contracts against real services:
//!
//! - [`AlphaVantageClient`]: quotes (`GLOBAL_QUOTE`) and fundamentals
//!   (`OVERVIEW`) from Alpha Vantage
//! - [`NewsApiClient`]: recent headlines from NewsAPI
//! - [`LexiconScorer`]: keyword-lexicon sentiment scoring over article text
//!
//! Clients are plain values constructed from [`DataConfig`] and passed in
//! explicitly wherever they are used; there are no process-wide singletons.

pub mod alpha_vantage;
pub mod config;
pub mod error;
pub mod news_api;
pub mod sentiment;

pub use alpha_vantage::AlphaVantageClient;
pub use config::DataConfig;
pub use error::{DataError, Result};
pub use news_api::NewsApiClient;
pub use sentiment::LexiconScorer;
