//! The three fetch steps of the collection pipeline

pub mod financials;
pub mod price;
pub mod sentiment;

pub use financials::FinancialsStep;
pub use price::PriceStep;
pub use sentiment::SentimentStep;
