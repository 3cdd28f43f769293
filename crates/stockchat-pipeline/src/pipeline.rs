//! Pipeline definition and execution

use crate::coordinator;
use crate::step::PipelineStep;
use crate::steps::{FinancialsStep, PriceStep, SentimentStep};
use std::sync::Arc;
use stockchat_core::{
    FundamentalsProvider, NewsProvider, QuoteProvider, SentimentScorer, StockState,
};
use tracing::debug;

/// The ordered sequence of fetch steps plus the coordinating state machine
///
/// Steps execute strictly one after another, each fully completing (its own
/// failure handling included) before the next begins, bracketed by the two
/// coordinator calls. One `run` owns one [`StockState`] exclusively; the
/// pipeline itself holds no per-run state and is safe to share behind an
/// `Arc` across concurrent requests.
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// The standard collection order: price, then financials, then sentiment
    pub fn standard(
        quotes: Arc<dyn QuoteProvider>,
        fundamentals: Arc<dyn FundamentalsProvider>,
        news: Arc<dyn NewsProvider>,
        scorer: Arc<dyn SentimentScorer>,
    ) -> Self {
        Self::builder()
            .add_step(Arc::new(PriceStep::new(quotes)))
            .add_step(Arc::new(FinancialsStep::new(fundamentals)))
            .add_step(Arc::new(SentimentStep::new(news, scorer)))
            .build()
    }

    /// Run one full collection for `symbol`
    ///
    /// Never fails: fetch failures end up as sentinels in their slots, and
    /// whether the run reached `complete` is the caller's check to make.
    pub async fn run(&self, symbol: &str) -> StockState {
        let mut state = StockState::new(symbol);
        coordinator::advance(&mut state);

        for step in &self.steps {
            debug!(symbol = %state.symbol, step = step.name(), "running step");
            step.run(&mut state).await;
        }

        coordinator::advance(&mut state);
        state
    }
}

/// Builder for constructing pipelines
#[derive(Default)]
pub struct PipelineBuilder {
    steps: Vec<Arc<dyn PipelineStep>>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step; steps run in insertion order
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Pipeline {
        Pipeline { steps: self.steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use stockchat_core::{
        Article, Error, Financials, PipelineStatus, Sentiment, SentimentSummary, Slot,
    };
    use stockchat_data::LexiconScorer;

    mockall::mock! {
        Quotes {}

        #[async_trait]
        impl QuoteProvider for Quotes {
            async fn latest_price(&self, symbol: &str) -> stockchat_core::Result<f64>;
        }
    }

    mockall::mock! {
        Fundamentals {}

        #[async_trait]
        impl FundamentalsProvider for Fundamentals {
            async fn fundamentals(&self, symbol: &str) -> stockchat_core::Result<Financials>;
        }
    }

    mockall::mock! {
        News {}

        #[async_trait]
        impl NewsProvider for News {
            async fn recent_articles(&self, symbol: &str) -> stockchat_core::Result<Vec<Article>>;
        }
    }

    mockall::mock! {
        Scorer {}

        impl SentimentScorer for Scorer {
            fn score(&self, articles: &[Article]) -> stockchat_core::Result<Sentiment>;
        }
    }

    fn sample_financials() -> Financials {
        Financials {
            market_cap: "3448000000000".to_string(),
            revenue: "391035000000".to_string(),
            earnings: "134661000000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_all_collaborators_succeed() {
        let mut quotes = MockQuotes::new();
        quotes
            .expect_latest_price()
            .returning(|_| Ok(231.41));

        let mut fundamentals = MockFundamentals::new();
        fundamentals
            .expect_fundamentals()
            .returning(|_| Ok(sample_financials()));

        let mut news = MockNews::new();
        news.expect_recent_articles().returning(|_| {
            Ok(vec![Article {
                title: "Apple shares surge on record revenue".to_string(),
                description: "Strong growth beats estimates".to_string(),
            }])
        });

        let pipeline = Pipeline::standard(
            Arc::new(quotes),
            Arc::new(fundamentals),
            Arc::new(news),
            Arc::new(LexiconScorer::new()),
        );

        let state = pipeline.run("AAPL").await;

        assert_eq!(state.status, PipelineStatus::Complete);
        assert_eq!(state.price, Slot::Value(231.41));
        assert_eq!(state.financials, Slot::Value(sample_financials()));
        let sentiment = state.sentiment.value().unwrap();
        assert!(matches!(
            sentiment.summary,
            SentimentSummary::Positive | SentimentSummary::Negative | SentimentSummary::Neutral
        ));
    }

    #[tokio::test]
    async fn test_all_collaborators_fail() {
        let mut quotes = MockQuotes::new();
        quotes
            .expect_latest_price()
            .returning(|symbol| Err(Error::unavailable(symbol, "no quote data")));

        let mut fundamentals = MockFundamentals::new();
        fundamentals
            .expect_fundamentals()
            .returning(|symbol| Err(Error::unavailable(symbol, "no overview data")));

        let mut news = MockNews::new();
        news.expect_recent_articles()
            .returning(|symbol| Err(Error::unavailable(symbol, "no news data")));

        let pipeline = Pipeline::standard(
            Arc::new(quotes),
            Arc::new(fundamentals),
            Arc::new(news),
            Arc::new(LexiconScorer::new()),
        );

        let state = pipeline.run("ZZZZ").await;

        // Completion is independent of per-field success
        assert_eq!(state.status, PipelineStatus::Complete);
        assert_eq!(state.price, Slot::Unavailable);
        assert_eq!(state.financials, Slot::Unavailable);
        assert_eq!(state.sentiment, Slot::Value(Sentiment::error()));
    }

    #[tokio::test]
    async fn test_failing_scorer_yields_error_sentinel() {
        let mut quotes = MockQuotes::new();
        quotes.expect_latest_price().returning(|_| Ok(1.0));

        let mut fundamentals = MockFundamentals::new();
        fundamentals
            .expect_fundamentals()
            .returning(|_| Ok(sample_financials()));

        let mut news = MockNews::new();
        news.expect_recent_articles().returning(|_| {
            Ok(vec![Article {
                title: "A headline".to_string(),
                description: String::new(),
            }])
        });

        let mut scorer = MockScorer::new();
        scorer
            .expect_score()
            .returning(|_| Err(Error::Other("scorer offline".to_string())));

        let pipeline = Pipeline::standard(
            Arc::new(quotes),
            Arc::new(fundamentals),
            Arc::new(news),
            Arc::new(scorer),
        );

        let state = pipeline.run("AAPL").await;
        assert_eq!(state.status, PipelineStatus::Complete);
        assert_eq!(state.sentiment, Slot::Value(Sentiment::error()));
    }

    #[tokio::test]
    async fn test_empty_news_is_not_a_failure() {
        let mut quotes = MockQuotes::new();
        quotes.expect_latest_price().returning(|_| Ok(1.0));

        let mut fundamentals = MockFundamentals::new();
        fundamentals
            .expect_fundamentals()
            .returning(|_| Ok(sample_financials()));

        let mut news = MockNews::new();
        news.expect_recent_articles().returning(|_| Ok(Vec::new()));

        let pipeline = Pipeline::standard(
            Arc::new(quotes),
            Arc::new(fundamentals),
            Arc::new(news),
            Arc::new(LexiconScorer::new()),
        );

        let state = pipeline.run("AAPL").await;
        assert_eq!(state.status, PipelineStatus::Complete);
        assert_eq!(state.sentiment, Slot::Value(Sentiment::no_articles()));
    }

    #[tokio::test]
    async fn test_steps_run_in_insertion_order() {
        struct RecordingStep {
            name: &'static str,
            log: Arc<Mutex<Vec<&'static str>>>,
        }

        #[async_trait]
        impl PipelineStep for RecordingStep {
            fn name(&self) -> &'static str {
                self.name
            }

            async fn run(&self, state: &mut StockState) {
                self.log.lock().unwrap().push(self.name);
                // Occupy a slot so the run can complete
                match self.name {
                    "price" => state.price = Slot::Value(0.0),
                    "financials" => state.financials = Slot::Unavailable,
                    _ => state.sentiment = Slot::Value(Sentiment::no_articles()),
                }
            }
        }

        let log = Arc::new(Mutex::new(Vec::new()));
        let step = |name| {
            Arc::new(RecordingStep {
                name,
                log: Arc::clone(&log),
            })
        };

        let pipeline = Pipeline::builder()
            .add_step(step("price"))
            .add_step(step("financials"))
            .add_step(step("sentiment"))
            .build();

        let state = pipeline.run("AAPL").await;
        assert_eq!(state.status, PipelineStatus::Complete);
        assert_eq!(*log.lock().unwrap(), vec!["price", "financials", "sentiment"]);
    }

    #[tokio::test]
    async fn test_empty_pipeline_never_completes() {
        let pipeline = Pipeline::builder().build();
        let state = pipeline.run("AAPL").await;
        assert_eq!(state.status, PipelineStatus::InProgress);
        assert!(!state.all_slots_filled());
    }
}
