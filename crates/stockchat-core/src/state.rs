//! Pipeline state for a single stock data collection run
//!
//! A [`StockState`] is created fresh per request, mutated in place by the
//! coordinator and the fetch steps, and discarded after it is returned to the
//! caller. Nothing here performs I/O.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wire marker written into a slot whose retrieval failed
const UNAVAILABLE: &str = "unavailable";

/// Coarse lifecycle status of a collection run
///
/// The transition table is fixed and never reverts:
///
/// | from          | to            |
/// |---------------|---------------|
/// | `Init`        | `InProgress`  |
/// | `InProgress`  | `Complete`    |
/// | `Complete`    | (terminal)    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    /// Freshly created, slots not yet initialized
    Init,
    /// Steps are running; slots fill in one by one
    InProgress,
    /// All slots are occupied (data or sentinel)
    Complete,
}

impl PipelineStatus {
    /// The single legal next status, if any
    pub fn successor(self) -> Option<Self> {
        match self {
            Self::Init => Some(Self::InProgress),
            Self::InProgress => Some(Self::Complete),
            Self::Complete => None,
        }
    }

    /// Whether this status has no successor
    pub fn is_terminal(self) -> bool {
        self.successor().is_none()
    }
}

impl fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Init => "init",
            Self::InProgress => "in_progress",
            Self::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// A data slot that distinguishes "not yet attempted" from "tried and failed"
///
/// Serializes as JSON `null` (empty), the string `"unavailable"` (failed), or
/// the inner value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Slot<T> {
    /// The owning step has not run yet
    #[default]
    Empty,
    /// The step ran and its lookup failed
    Unavailable,
    /// The step ran and retrieved data
    Value(T),
}

impl<T> Slot<T> {
    /// True unless the slot is still [`Slot::Empty`]
    ///
    /// A failure marker counts as filled: the pipeline treats "we tried and
    /// got nothing" the same as "we have data" for completion purposes.
    pub fn is_filled(&self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Borrow the inner value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Serialize> Serialize for Slot<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_none(),
            Self::Unavailable => serializer.serialize_str(UNAVAILABLE),
            Self::Value(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Slot<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Null => Ok(Self::Empty),
            serde_json::Value::String(ref s) if s == UNAVAILABLE => Ok(Self::Unavailable),
            other => serde_json::from_value(other)
                .map(Self::Value)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Fundamental metrics as the provider reports them
///
/// Figures stay in the provider's string form end to end; display formatting
/// is the front end's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Financials {
    pub market_cap: String,
    pub revenue: String,
    pub earnings: String,
}

/// A news article headline with its summary text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
}

/// Per-article sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        };
        f.write_str(s)
    }
}

/// Aggregate sentiment verdict over a batch of articles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentSummary {
    Positive,
    Negative,
    Neutral,
    /// Sentinel written when the sentiment step fails
    Error,
    /// Verdict for an empty article batch
    #[serde(rename = "No articles found")]
    NoArticles,
}

impl fmt::Display for SentimentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Error => "Error",
            Self::NoArticles => "No articles found",
        };
        f.write_str(s)
    }
}

/// Scored sentiment for one article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSentiment {
    pub title: String,
    pub sentiment: SentimentLabel,
}

/// Sentiment result: one summary label plus per-article detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentiment {
    pub summary: SentimentSummary,
    pub details: Vec<ArticleSentiment>,
}

impl Sentiment {
    /// The exact sentinel the sentiment step writes on failure
    ///
    /// Note the asymmetry with price and financials: a failed sentiment step
    /// fills its slot with this value rather than [`Slot::Unavailable`].
    pub fn error() -> Self {
        Self {
            summary: SentimentSummary::Error,
            details: Vec::new(),
        }
    }

    /// Verdict for an empty article batch
    pub fn no_articles() -> Self {
        Self {
            summary: SentimentSummary::NoArticles,
            details: Vec::new(),
        }
    }
}

/// The record a single collection run fills in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockState {
    /// Ticker symbol the run is about; set at creation, never changed
    pub symbol: String,
    pub price: Slot<f64>,
    pub financials: Slot<Financials>,
    pub sentiment: Slot<Sentiment>,
    pub status: PipelineStatus,
}

impl StockState {
    /// Fresh state: status `init`, all slots empty
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            price: Slot::Empty,
            financials: Slot::Empty,
            sentiment: Slot::Empty,
            status: PipelineStatus::Init,
        }
    }

    /// Reset all three slots to [`Slot::Empty`]
    pub fn clear_slots(&mut self) {
        self.price = Slot::Empty;
        self.financials = Slot::Empty;
        self.sentiment = Slot::Empty;
    }

    /// True when every slot holds either data or its failure sentinel
    pub fn all_slots_filled(&self) -> bool {
        self.price.is_filled() && self.financials.is_filled() && self.sentiment.is_filled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_transition_table() {
        assert_eq!(
            PipelineStatus::Init.successor(),
            Some(PipelineStatus::InProgress)
        );
        assert_eq!(
            PipelineStatus::InProgress.successor(),
            Some(PipelineStatus::Complete)
        );
        assert_eq!(PipelineStatus::Complete.successor(), None);

        assert!(!PipelineStatus::Init.is_terminal());
        assert!(!PipelineStatus::InProgress.is_terminal());
        assert!(PipelineStatus::Complete.is_terminal());
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_value(PipelineStatus::InProgress).unwrap(),
            json!("in_progress")
        );
        assert_eq!(
            serde_json::from_value::<PipelineStatus>(json!("complete")).unwrap(),
            PipelineStatus::Complete
        );
    }

    #[test]
    fn test_slot_serialization() {
        assert_eq!(serde_json::to_value(Slot::<f64>::Empty).unwrap(), json!(null));
        assert_eq!(
            serde_json::to_value(Slot::<f64>::Unavailable).unwrap(),
            json!("unavailable")
        );
        assert_eq!(
            serde_json::to_value(Slot::Value(231.5)).unwrap(),
            json!(231.5)
        );
    }

    #[test]
    fn test_slot_deserialization() {
        let slot: Slot<f64> = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(slot, Slot::Empty);

        let slot: Slot<f64> = serde_json::from_value(json!("unavailable")).unwrap();
        assert_eq!(slot, Slot::Unavailable);

        let slot: Slot<f64> = serde_json::from_value(json!(231.5)).unwrap();
        assert_eq!(slot, Slot::Value(231.5));
    }

    #[test]
    fn test_slot_occupancy() {
        assert!(!Slot::<f64>::Empty.is_filled());
        assert!(Slot::<f64>::Unavailable.is_filled());
        assert!(Slot::Value(1.0).is_filled());
    }

    #[test]
    fn test_fresh_state() {
        let state = StockState::new("AAPL");
        assert_eq!(state.symbol, "AAPL");
        assert_eq!(state.status, PipelineStatus::Init);
        assert!(!state.all_slots_filled());
    }

    #[test]
    fn test_sentiment_error_sentinel() {
        let sentinel = Sentiment::error();
        assert_eq!(
            serde_json::to_value(&sentinel).unwrap(),
            json!({"summary": "Error", "details": []})
        );
    }

    #[test]
    fn test_sentiment_no_articles_wire_format() {
        assert_eq!(
            serde_json::to_value(Sentiment::no_articles()).unwrap(),
            json!({"summary": "No articles found", "details": []})
        );
    }

    #[test]
    fn test_state_round_trip() {
        let mut state = StockState::new("TSLA");
        state.price = Slot::Value(244.12);
        state.financials = Slot::Unavailable;
        state.sentiment = Slot::Value(Sentiment {
            summary: SentimentSummary::Positive,
            details: vec![ArticleSentiment {
                title: "Tesla beats delivery estimates".to_string(),
                sentiment: SentimentLabel::Positive,
            }],
        });
        state.status = PipelineStatus::Complete;

        let wire = serde_json::to_value(&state).unwrap();
        assert_eq!(wire["financials"], json!("unavailable"));
        assert_eq!(wire["status"], json!("complete"));

        let back: StockState = serde_json::from_value(wire).unwrap();
        assert_eq!(back, state);
    }
}
